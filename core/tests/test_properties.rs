// Property-based checks over arbitrary type URLs, payloads and byte soup.

#[cfg(test)]
mod tests {
    use opaqueany::{any::deserialize_from_bytes, OpaqueValue};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn round_trip(type_url in ".*", value in proptest::collection::vec(any::<u8>(), 0..512)) {
            let original = OpaqueValue::new(type_url.clone(), value.clone());
            let wire = original.serialize_to_bytes();
            prop_assert_eq!(wire.len(), original.encoded_len());

            let decoded = deserialize_from_bytes(&wire).unwrap();
            prop_assert_eq!(decoded.type_url(), type_url.as_str());
            prop_assert_eq!(decoded.value_as_slice(), value.as_slice());
        }

        #[test]
        fn base64_view_round_trip(value in proptest::collection::vec(any::<u8>(), 0..256)) {
            let any = OpaqueValue::new("", value.clone());
            let back = OpaqueValue::from_b64("", &any.value_as_b64()).unwrap();
            prop_assert_eq!(back.value_as_slice(), value.as_slice());
        }

        #[test]
        fn decode_never_panics(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
            if let Err(err) = deserialize_from_bytes(&bytes) {
                prop_assert!(err.is_malformed());
            }
        }

        #[test]
        fn unknown_prefix_is_ignored(
            field in 3u32..1000,
            payload in proptest::collection::vec(any::<u8>(), 0..64),
            type_url in "[a-z./]{0,32}",
        ) {
            let mut wire = Vec::new();
            opaqueany::wire::encode_length_delimited(field, &payload, &mut wire);
            let any = OpaqueValue::new(type_url, vec![1, 2, 3]);
            wire.extend_from_slice(&any.serialize_to_bytes());
            prop_assert_eq!(deserialize_from_bytes(&wire).unwrap(), any);
        }
    }
}
