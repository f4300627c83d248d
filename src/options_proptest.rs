use proptest::prelude::*;

use crate::options::ReceiverOptions;
use crate::playback::StreamPriority;
use crate::provider::ProviderOptions;

fn stream_priority_strategy() -> impl Strategy<Value = Vec<StreamPriority>> {
    proptest::collection::vec(
        ("[a-z][a-z0-9]{0,11}", "[a-z][a-z0-9]{0,11}")
            .prop_map(|(engine, format)| StreamPriority::new(engine, format)),
        0..8,
    )
}

proptest! {
    // Round-trip must preserve the priority list order exactly
    #[test]
    fn test_round_trip_preserves_priority_order(priority in stream_priority_strategy()) {
        let options = ReceiverOptions::builder()
            .provider(ProviderOptions::new(1234))
            .stream_priority(priority.clone())
            .build()
            .unwrap();

        let json = options.to_json_string().unwrap();
        let reparsed = ReceiverOptions::from_json_str(&json).unwrap();

        prop_assert_eq!(reparsed.playback.unwrap().stream_priority, priority);
    }

    // Round-trip must preserve the field set: absent stays absent
    #[test]
    fn test_round_trip_preserves_field_set(partner_id in any::<i64>()) {
        let options = ReceiverOptions::new(ProviderOptions::new(partner_id));

        let json = options.to_json_string().unwrap();
        let reparsed = ReceiverOptions::from_json_str(&json).unwrap();

        prop_assert_eq!(reparsed, options);
    }
}
