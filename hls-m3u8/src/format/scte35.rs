use std::fmt::Display;

use smol_str::SmolStr;

use crate::{
    attributes::{AttributeListWriter, AttributeMap, Attributes},
    error::TagError,
    format::{Tag, directives, directives::attr},
};

const KNOWN: &[&str] = &[
    attr::CUE,
    attr::DURATION,
    attr::ELAPSED,
    attr::ID,
    attr::TIME,
    attr::TYPE,
    attr::UPID,
    attr::BLACKOUT,
    attr::CUE_OUT,
    attr::CUE_IN,
    attr::SEGNE,
];

/// `#EXT-X-SCTE35`, an ad marker carrying a SCTE-35 cue.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scte35Item {
    pub cue: Option<SmolStr>,
    pub duration: Option<f64>,
    pub elapsed: Option<f64>,
    pub id: Option<SmolStr>,
    pub time: Option<f64>,
    /// `TYPE`, written back in hexadecimal
    pub segmentation_type: Option<u64>,
    pub upid: Option<SmolStr>,
    pub blackout: Option<SmolStr>,
    pub cue_out: Option<SmolStr>,
    pub cue_in: Option<SmolStr>,
    pub segne: Option<SmolStr>,
    pub attributes: AttributeMap,
}

impl Scte35Item {
    pub fn parse(text: &str) -> Result<Self, TagError> {
        let attributes = Attributes::parse(text);

        Ok(Self {
            cue: attributes.string(attr::CUE),
            duration: attributes.float(attr::DURATION)?,
            elapsed: attributes.float(attr::ELAPSED)?,
            id: attributes.string(attr::ID),
            time: attributes.float(attr::TIME)?,
            segmentation_type: attributes.unsigned(attr::TYPE)?,
            upid: attributes.string(attr::UPID),
            blackout: attributes.string(attr::BLACKOUT),
            cue_out: attributes.string(attr::CUE_OUT),
            cue_in: attributes.string(attr::CUE_IN),
            segne: attributes.string(attr::SEGNE),
            attributes: attributes.residual(KNOWN),
        })
    }
}

impl Display for Scte35Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut writer = AttributeListWriter::new();
        writer
            .quoted_opt(attr::CUE, self.cue.as_ref())
            .plain_opt(attr::DURATION, self.duration.map(|v| format!("{:.12}", v)))
            .plain_opt(attr::ELAPSED, self.elapsed.map(|v| format!("{:.3}", v)))
            .quoted_opt(attr::ID, self.id.as_ref())
            .plain_opt(attr::TIME, self.time.map(|v| format!("{:.3}", v)))
            .plain_opt(attr::TYPE, self.segmentation_type.map(|v| format!("{:#x}", v)))
            .quoted_opt(attr::UPID, self.upid.as_ref())
            .plain_opt(attr::BLACKOUT, self.blackout.as_ref())
            .plain_opt(attr::CUE_OUT, self.cue_out.as_ref())
            .plain_opt(attr::CUE_IN, self.cue_in.as_ref())
            .quoted_opt(attr::SEGNE, self.segne.as_ref())
            .residual(&self.attributes);

        write!(f, "{}:{}", directives::SCTE35, writer)
    }
}

impl Tag for Scte35Item {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scte35_item_parse() {
        let line = concat!(
            r#"#EXT-X-SCTE35:CUE="/DAIAAAAAAAAAAAQAAZ/I0VniQAQAgBDVUVJQAAAAH+cAAAAAA==","#,
            r#"DURATION=30.000000000000,ELAPSED=8.000,ID="123",TIME=1.500,TYPE=0x34,"#,
            r#"UPID="0x0C:0x1234",BLACKOUT=YES,CUE-OUT=YES,CUE-IN=NO,SEGNE="1:5""#,
        );

        let item = Scte35Item::parse(line).unwrap();
        assert_eq!(
            item.cue.as_deref(),
            Some("/DAIAAAAAAAAAAAQAAZ/I0VniQAQAgBDVUVJQAAAAH+cAAAAAA==")
        );
        assert_eq!(item.duration, Some(30.0));
        assert_eq!(item.elapsed, Some(8.0));
        assert_eq!(item.id.as_deref(), Some("123"));
        assert_eq!(item.time, Some(1.5));
        assert_eq!(item.segmentation_type, Some(0x34));
        assert_eq!(item.upid.as_deref(), Some("0x0C:0x1234"));
        assert_eq!(item.blackout.as_deref(), Some("YES"));
        assert_eq!(item.cue_out.as_deref(), Some("YES"));
        assert_eq!(item.cue_in.as_deref(), Some("NO"));
        assert_eq!(item.segne.as_deref(), Some("1:5"));
        assert!(item.attributes.is_empty());

        assert_eq!(item.to_string(), line);
    }

    #[test]
    fn test_scte35_item_cue_only() {
        let item = Scte35Item::parse(r#"#EXT-X-SCTE35:CUE="abc",X-OTHER=1"#).unwrap();
        assert_eq!(item.to_string(), r#"#EXT-X-SCTE35:CUE="abc",X-OTHER=1"#);
    }

    #[test]
    fn test_scte35_item_invalid_type() {
        assert!(Scte35Item::parse(r#"#EXT-X-SCTE35:CUE="abc",TYPE=zz"#).is_err());
        assert!(Scte35Item::parse(r#"#EXT-X-SCTE35:CUE="abc",TYPE=-5"#).is_err());
        assert!(
            Scte35Item::parse(r#"#EXT-X-SCTE35:CUE="abc",TYPE=0x10000000000000000"#).is_err()
        );
    }

    #[test]
    fn test_scte35_item_type_range() {
        let item = Scte35Item::parse(r#"#EXT-X-SCTE35:CUE="abc",TYPE=52"#).unwrap();
        assert_eq!(item.to_string(), r#"#EXT-X-SCTE35:CUE="abc",TYPE=0x34"#);

        let line = r#"#EXT-X-SCTE35:CUE="abc",TYPE=0xffffffffffffffff"#;
        let item = Scte35Item::parse(line).unwrap();
        assert_eq!(item.segmentation_type, Some(u64::MAX));
        assert_eq!(item.to_string(), line);
        assert_eq!(Scte35Item::parse(&item.to_string()).unwrap(), item);
    }
}
