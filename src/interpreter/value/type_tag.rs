/// A type tag names a category of value rather than holding data of that
/// category.
///
/// Type tags are written `@Type:Name` and can only be compared with each other
/// for equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// `@Type:String`
    String,
    /// `@Type:Number`
    Number,
    /// `@Type:Boolean`
    Boolean,
    /// `@Type:Array`
    Array,
    /// `@Type:Function`
    Function,
}

/// The prefix every type tag literal starts with.
pub const TYPE_TAG_PREFIX: &str = "@Type:";

impl TypeTag {
    /// Parses a full `@Type:Name` literal.
    ///
    /// Returns `None` if the prefix is missing or the name is unknown.
    ///
    /// # Example
    /// ```
    /// use octane::interpreter::value::type_tag::TypeTag;
    ///
    /// assert_eq!(TypeTag::from_literal("@Type:Number"), Some(TypeTag::Number));
    /// assert_eq!(TypeTag::from_literal("@Type:Integer"), None);
    /// assert_eq!(TypeTag::from_literal("Number"), None);
    /// ```
    #[must_use]
    pub fn from_literal(literal: &str) -> Option<Self> {
        match literal.strip_prefix(TYPE_TAG_PREFIX)? {
            "String" => Some(Self::String),
            "Number" => Some(Self::Number),
            "Boolean" => Some(Self::Boolean),
            "Array" => Some(Self::Array),
            "Function" => Some(Self::Function),
            _ => None,
        }
    }

    /// The bare name of the category, without the `@Type:` prefix.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Number => "Number",
            Self::Boolean => "Boolean",
            Self::Array => "Array",
            Self::Function => "Function",
        }
    }
}

impl std::fmt::Display for TypeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{TYPE_TAG_PREFIX}{}", self.name())
    }
}
