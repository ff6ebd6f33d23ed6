/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use iot::model::{MessageFormat, SnsAction};
use proptest::prelude::*;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn display_with_only_target_arn() {
    let action = SnsAction::builder()
        .target_arn("arn:aws:sns:us-east-1:1234:topic")
        .build();
    assert_eq!(
        action.to_string(),
        "{TargetArn: arn:aws:sns:us-east-1:1234:topic}"
    );
}

#[test]
fn display_renders_message_format_as_wire_string() {
    let action = SnsAction::builder()
        .target_arn("t")
        .role_arn("r")
        .message_format(MessageFormat::Json)
        .build();
    assert_eq!(action.to_string(), "{TargetArn: t,RoleArn: r,MessageFormat: JSON}");
}

#[test]
fn message_format_from_enum_reports_wire_string() {
    let action = SnsAction::builder()
        .message_format(MessageFormat::Raw)
        .build();
    assert_eq!(action.message_format(), Some(&MessageFormat::Raw));
    assert_eq!(action.message_format().map(MessageFormat::as_str), Some("RAW"));
}

#[test]
fn message_format_from_string() {
    let action = SnsAction::builder().message_format("JSON").build();
    assert_eq!(action.message_format(), Some(&MessageFormat::Json));
    assert_eq!("RAW".parse::<MessageFormat>(), Ok(MessageFormat::Raw));
}

#[test]
fn unknown_message_formats_are_preserved() {
    let action = SnsAction::builder().message_format("XML").build();
    assert_eq!(
        action.message_format(),
        Some(&MessageFormat::Unknown("XML".to_string()))
    );
    assert_eq!(action.message_format().map(AsRef::<str>::as_ref), Some("XML"));
    assert_eq!(MessageFormat::values(), &["JSON", "RAW"]);
}

#[test]
fn unset_members_and_equality() {
    let empty = SnsAction::builder().build();
    assert_eq!(empty, SnsAction::default());
    assert_eq!(empty.target_arn(), None);
    assert_eq!(empty.message_format(), None);
    assert_eq!(empty.to_string(), "{}");

    let mut assigned = SnsAction::default();
    assigned.message_format = Some(MessageFormat::Raw);
    assert_ne!(assigned, empty);
    assert_eq!(assigned, SnsAction::builder().message_format("RAW").build());
    assert_ne!(Some(&assigned), None);
}

fn arb_message_format() -> impl Strategy<Value = MessageFormat> {
    prop_oneof![
        Just(MessageFormat::Json),
        Just(MessageFormat::Raw),
        "[A-Z]{1,5}".prop_map(|s| MessageFormat::from(s.as_str())),
    ]
}

fn arb_sns_action() -> impl Strategy<Value = SnsAction> {
    (
        proptest::option::of("arn:aws:sns:[a-z0-9-]{1,8}:[0-9]{4}:[a-z]{1,6}"),
        proptest::option::of("arn:aws:iam::[0-9]{4}:role/[a-z]{1,6}"),
        proptest::option::of(arb_message_format()),
    )
        .prop_map(|(target_arn, role_arn, message_format)| {
            SnsAction::builder()
                .set_target_arn(target_arn)
                .set_role_arn(role_arn)
                .set_message_format(message_format)
                .build()
        })
}

proptest! {
    #[test]
    fn equal_actions_hash_equal(a in arb_sns_action(), b in arb_sns_action()) {
        prop_assert_eq!(&a, &a.clone());
        if a == b {
            prop_assert_eq!(hash_of(&a), hash_of(&b));
        }
    }

    #[test]
    fn wire_strings_round_trip(format in arb_message_format()) {
        prop_assert_eq!(MessageFormat::from(format.as_str()), format);
    }
}
