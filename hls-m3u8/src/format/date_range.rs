use std::fmt::Display;

use smol_str::SmolStr;

use crate::{
    attributes::{AttributeListWriter, AttributeMap, Attributes},
    error::TagError,
    format::{Tag, directives, directives::attr},
};

const KNOWN: &[&str] = &[
    attr::ID,
    attr::CLASS,
    attr::CUE,
    attr::START_DATE,
    attr::END_DATE,
    attr::DURATION,
    attr::PLANNED_DURATION,
    attr::SCTE35_CMD,
    attr::SCTE35_OUT,
    attr::SCTE35_IN,
    attr::END_ON_NEXT,
];

/// `#EXT-X-DATERANGE`
///
/// `X-` client attributes are not modelled and live in `attributes`.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DateRangeItem {
    pub id: Option<SmolStr>,
    pub class: Option<SmolStr>,
    pub cue: Option<SmolStr>,
    pub start_date: Option<SmolStr>,
    pub end_date: Option<SmolStr>,
    pub duration: Option<f64>,
    pub planned_duration: Option<f64>,
    pub scte35_cmd: Option<SmolStr>,
    pub scte35_out: Option<SmolStr>,
    pub scte35_in: Option<SmolStr>,
    pub end_on_next: bool,
    pub attributes: AttributeMap,
}

impl DateRangeItem {
    pub fn parse(text: &str) -> Result<Self, TagError> {
        let attributes = Attributes::parse(text);

        Ok(Self {
            id: attributes.string(attr::ID),
            class: attributes.string(attr::CLASS),
            cue: attributes.string(attr::CUE),
            start_date: attributes.string(attr::START_DATE),
            end_date: attributes.string(attr::END_DATE),
            duration: attributes.float(attr::DURATION)?,
            planned_duration: attributes.float(attr::PLANNED_DURATION)?,
            scte35_cmd: attributes.string(attr::SCTE35_CMD),
            scte35_out: attributes.string(attr::SCTE35_OUT),
            scte35_in: attributes.string(attr::SCTE35_IN),
            end_on_next: attributes.contains(attr::END_ON_NEXT),
            attributes: attributes.residual(KNOWN),
        })
    }
}

impl Display for DateRangeItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut writer = AttributeListWriter::new();
        writer
            .quoted_opt(attr::ID, self.id.as_ref())
            .quoted_opt(attr::CLASS, self.class.as_ref())
            .quoted_opt(attr::CUE, self.cue.as_ref())
            .quoted_opt(attr::START_DATE, self.start_date.as_ref())
            .quoted_opt(attr::END_DATE, self.end_date.as_ref())
            .plain_opt(attr::DURATION, self.duration)
            .plain_opt(attr::PLANNED_DURATION, self.planned_duration)
            .residual(&self.attributes)
            .plain_opt(attr::SCTE35_CMD, self.scte35_cmd.as_ref())
            .plain_opt(attr::SCTE35_OUT, self.scte35_out.as_ref())
            .plain_opt(attr::SCTE35_IN, self.scte35_in.as_ref());
        if self.end_on_next {
            writer.yes_no_opt(attr::END_ON_NEXT, Some(true));
        }

        write!(f, "{}:{}", directives::DATE_RANGE, writer)
    }
}

impl Tag for DateRangeItem {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_range_item_parse() {
        let line = concat!(
            r#"#EXT-X-DATERANGE:ID="splice-6FFFFFF0",CLASS="test_class","#,
            r#"START-DATE="2014-03-05T11:15:00Z",END-DATE="2014-03-05T11:16:00Z","#,
            r#"DURATION=60.1,PLANNED-DURATION=59.993,X-CUSTOM="value","#,
            "SCTE35-OUT=0xFC002F0000000000FF0,END-ON-NEXT=YES",
        );

        let item = DateRangeItem::parse(line).unwrap();
        assert_eq!(item.id.as_deref(), Some("splice-6FFFFFF0"));
        assert_eq!(item.class.as_deref(), Some("test_class"));
        assert_eq!(item.cue, None);
        assert_eq!(item.start_date.as_deref(), Some("2014-03-05T11:15:00Z"));
        assert_eq!(item.end_date.as_deref(), Some("2014-03-05T11:16:00Z"));
        assert_eq!(item.duration, Some(60.1));
        assert_eq!(item.planned_duration, Some(59.993));
        assert_eq!(item.scte35_out.as_deref(), Some("0xFC002F0000000000FF0"));
        assert_eq!(item.scte35_in, None);
        assert!(item.end_on_next);
        assert_eq!(item.attributes.get("X-CUSTOM").unwrap(), "\"value\"");

        assert_eq!(item.to_string(), line);
    }

    #[test]
    fn test_date_range_item_minimal() {
        let line = r#"#EXT-X-DATERANGE:ID="ad1",START-DATE="2014-03-05T11:15:00Z",DURATION=60"#;
        let item = DateRangeItem::parse(line).unwrap();
        assert!(!item.end_on_next);
        assert_eq!(item.to_string(), line);
    }

    #[test]
    fn test_date_range_item_invalid_duration() {
        assert!(DateRangeItem::parse(r#"#EXT-X-DATERANGE:ID="x",DURATION=long"#).is_err());
    }
}
