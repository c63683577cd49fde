use std::fmt::Display;

use smol_str::SmolStr;

use crate::{
    attributes::{AttributeListWriter, AttributeMap, Attributes},
    error::TagError,
    format::{Tag, directives, directives::attr},
};

const KNOWN: &[&str] = &[attr::NAME, attr::VALUE, attr::IMPORT, attr::QUERY_PARAM];

/// `#EXT-X-DEFINE`, a variable for substitution. Kept as written, no
/// substitution is performed.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DefineItem {
    pub name: Option<SmolStr>,
    pub value: Option<SmolStr>,
    pub import: Option<SmolStr>,
    pub query_param: Option<SmolStr>,
    pub attributes: AttributeMap,
}

impl DefineItem {
    pub fn parse(text: &str) -> Result<Self, TagError> {
        let attributes = Attributes::parse(text);

        Ok(Self {
            name: attributes.string(attr::NAME),
            value: attributes.string(attr::VALUE),
            import: attributes.string(attr::IMPORT),
            query_param: attributes.string(attr::QUERY_PARAM),
            attributes: attributes.residual(KNOWN),
        })
    }
}

impl Display for DefineItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut writer = AttributeListWriter::new();
        writer
            .quoted_opt(attr::NAME, self.name.as_ref())
            .quoted_opt(attr::VALUE, self.value.as_ref())
            .quoted_opt(attr::IMPORT, self.import.as_ref())
            .quoted_opt(attr::QUERY_PARAM, self.query_param.as_ref())
            .residual(&self.attributes);

        write!(f, "{}:{}", directives::DEFINE, writer)
    }
}

impl Tag for DefineItem {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_define_item_parse() {
        let line = r#"#EXT-X-DEFINE:NAME="base",VALUE="https://cdn.example.com""#;
        let item = DefineItem::parse(line).unwrap();
        assert_eq!(item.name.as_deref(), Some("base"));
        assert_eq!(item.value.as_deref(), Some("https://cdn.example.com"));
        assert_eq!(item.import, None);
        assert_eq!(item.to_string(), line);

        let line = r#"#EXT-X-DEFINE:IMPORT="token""#;
        assert_eq!(DefineItem::parse(line).unwrap().to_string(), line);

        let line = r#"#EXT-X-DEFINE:QUERYPARAM="session""#;
        assert_eq!(DefineItem::parse(line).unwrap().to_string(), line);
    }
}
