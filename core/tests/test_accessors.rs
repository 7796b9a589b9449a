// Accessors, base64 views and plain-object snapshots.

#[cfg(test)]
mod tests {
    use opaqueany::{AnyError, OpaqueValue, PlainObject};

// ## 1. Construction and setters

    #[test]
    fn new_value_is_empty() {
        let any = OpaqueValue::default();
        assert_eq!(any.type_url(), "");
        assert!(any.value().is_empty());
        assert!(any.is_empty());
    }

    #[test]
    fn setters_accept_anything() {
        let mut any = OpaqueValue::default();
        any.set_type_url("not a url at all");
        any.set_value(vec![1, 2, 3]);
        assert_eq!(any.type_url(), "not a url at all");
        assert_eq!(any.value_as_slice(), &[1, 2, 3]);

        any.set_type_url("");
        assert_eq!(any.type_url(), "");
        assert!(!any.is_empty());

        any.clear();
        assert!(any.is_empty());
    }

// ## 2. Base64 views

    #[test]
    fn base64_view_round_trips() {
        let any = OpaqueValue::new("t", vec![0x00, 0xFF]);
        let b64 = any.value_as_b64();
        assert_eq!(b64, "AP8=");

        let mut other = OpaqueValue::default();
        other.set_value_b64(&b64).unwrap();
        assert_eq!(other.value_as_slice(), &[0x00, 0xFF]);
    }

    #[test]
    fn from_b64_builds_value() {
        let any = OpaqueValue::from_b64("example.com/Foo", "AQI=").unwrap();
        assert_eq!(any, OpaqueValue::new("example.com/Foo", vec![0x01, 0x02]));
    }

    #[test]
    fn bad_base64_leaves_value_untouched() {
        let mut any = OpaqueValue::new("t", vec![9]);
        let err = any.set_value_b64("not base64!").unwrap_err();
        assert!(matches!(err, AnyError::InvalidBase64(_)));
        assert!(!err.is_malformed());
        assert_eq!(any.value_as_slice(), &[9]);
    }

    #[test]
    fn empty_payload_base64_is_empty_string() {
        assert_eq!(OpaqueValue::default().value_as_b64(), "");
    }

// ## 3. Plain objects

    #[test]
    fn plain_object_is_a_snapshot() {
        let mut any = OpaqueValue::new("example.com/Foo", vec![0x01, 0x02]);
        let mut obj = any.to_plain_object();

        any.set_type_url("changed");
        any.set_value(vec![0xEE]);
        assert_eq!(obj.type_url, "example.com/Foo");
        assert_eq!(obj.value, vec![0x01, 0x02]);

        obj.value.push(0x03);
        assert_eq!(any.value_as_slice(), &[0xEE]);
    }

    #[test]
    fn plain_object_converts_back() {
        let any = OpaqueValue::new("a/B", vec![5, 6]);
        let obj = PlainObject::from(&any);
        assert_eq!(OpaqueValue::from(obj), any);
    }

    #[test]
    fn plain_object_json_shape() {
        let obj = OpaqueValue::new("example.com/Foo", vec![0x00, 0xFF]).to_plain_object();
        let json = serde_json::to_value(&obj).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "typeUrl": "example.com/Foo", "value": "AP8=" })
        );

        let back: PlainObject = serde_json::from_value(json).unwrap();
        assert_eq!(back, obj);
    }

    #[test]
    fn plain_object_json_defaults() {
        let obj: PlainObject = serde_json::from_str("{}").unwrap();
        assert_eq!(obj, PlainObject::default());

        let err = serde_json::from_str::<PlainObject>(r#"{"value": "%%%"}"#);
        assert!(err.is_err());
    }

// ## 4. Display

    #[test]
    fn display_previews_payload() {
        let text = OpaqueValue::new("a/B", b"hi".to_vec()).to_string();
        assert_eq!(text, "Any { type_url: \"a/B\", value: b\"hi\" }");

        let text = OpaqueValue::new("a/B", vec![0x00, 0x01]).to_string();
        assert!(text.contains("0x0001"));
    }
}
