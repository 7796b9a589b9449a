// DecodeOptions defaults and loading from host configuration.

#[cfg(test)]
mod tests {
    use opaqueany::{constants::DEFAULT_RECURSION_LIMIT, DecodeOptions};

    #[test]
    fn defaults_impose_no_size_limit() {
        let opts = DecodeOptions::default();
        assert_eq!(opts.max_message_len, None);
        assert_eq!(opts.recursion_limit, DEFAULT_RECURSION_LIMIT);
    }

    #[test]
    fn builder_overrides() {
        let opts = DecodeOptions::default().max_message_len(1024).recursion_limit(4);
        assert_eq!(opts.max_message_len, Some(1024));
        assert_eq!(opts.recursion_limit, 4);
    }

    #[test]
    fn loads_partial_json() {
        let opts: DecodeOptions = serde_json::from_str(r#"{ "max_message_len": 4096 }"#).unwrap();
        assert_eq!(opts, DecodeOptions::default().max_message_len(4096));

        let opts: DecodeOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts, DecodeOptions::default());
    }
}
