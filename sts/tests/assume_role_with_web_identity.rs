/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use proptest::prelude::*;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use sts::input::AssumeRoleWithWebIdentityRequest;

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn fluent_chain_matches_two_step_construction() {
    let fluent = AssumeRoleWithWebIdentityRequest::builder()
        .role_arn("r")
        .duration_seconds(900)
        .build();

    let builder = AssumeRoleWithWebIdentityRequest::builder();
    let builder = builder.set_role_arn(Some("r".to_string()));
    let builder = builder.set_duration_seconds(Some(900));
    let two_step = builder.build();

    let mut assigned = AssumeRoleWithWebIdentityRequest::default();
    assigned.role_arn = Some("r".to_string());
    assigned.duration_seconds = Some(900);

    assert_eq!(fluent, two_step);
    assert_eq!(fluent, assigned);
    assert_eq!(hash_of(&fluent), hash_of(&two_step));
    assert_eq!(hash_of(&fluent), hash_of(&assigned));
}

#[test]
fn getters_reflect_the_current_value() {
    let mut request = AssumeRoleWithWebIdentityRequest::builder()
        .role_arn("arn:aws:iam::123456789012:role/FederatedWebIdentityRole")
        .role_session_name("app1")
        .web_identity_token("Atza|IQEBLjAsAhRFiXuWpUXuRvQ9PZL3GMFcYevydwIUFAHZwXZXX")
        .provider_id("www.amazon.com")
        .policy("{\"Version\":\"2012-10-17\"}")
        .duration_seconds(3600)
        .build();
    assert_eq!(
        request.role_arn(),
        Some("arn:aws:iam::123456789012:role/FederatedWebIdentityRole")
    );
    assert_eq!(request.role_session_name(), Some("app1"));
    assert_eq!(request.provider_id(), Some("www.amazon.com"));
    assert_eq!(request.duration_seconds(), Some(3600));

    request.provider_id = None;
    assert_eq!(request.provider_id(), None);
}

#[test]
fn documented_constraints_are_not_enforced() {
    let request = AssumeRoleWithWebIdentityRequest::builder()
        .role_arn("short")
        .role_session_name("has spaces!")
        .duration_seconds(5)
        .build();
    assert_eq!(request.duration_seconds(), Some(5));
    assert_eq!(request.role_session_name(), Some("has spaces!"));
}

#[test]
fn builder_setters_replace_unconditionally() {
    let builder = AssumeRoleWithWebIdentityRequest::builder()
        .policy("first")
        .policy("second");
    assert_eq!(builder.get_policy().as_deref(), Some("second"));
    let builder = builder.set_policy(None);
    assert_eq!(builder.get_policy(), &None);
}

#[test]
fn builders_compare_and_clone_like_plain_values() {
    use sts::input::assume_role_with_web_identity_request::Builder;
    let builder = Builder::default().role_arn("r").duration_seconds(900);
    let copy = builder.clone();
    assert_eq!(builder, copy);
    assert_eq!(
        builder,
        AssumeRoleWithWebIdentityRequest::builder()
            .role_arn("r")
            .duration_seconds(900)
    );
    assert_ne!(copy.clone().policy("p"), builder);
    assert_eq!(copy.build(), builder.build());
}

#[test]
fn absent_and_present_members_are_never_equal() {
    let empty = AssumeRoleWithWebIdentityRequest::default();
    let with_arn = AssumeRoleWithWebIdentityRequest::builder()
        .role_arn("r")
        .build();
    assert_ne!(empty, with_arn);
    assert_ne!(Some(&with_arn), None);
    assert_eq!(empty, AssumeRoleWithWebIdentityRequest::builder().build());
}

#[test]
fn display_omits_unset_members() {
    let request = AssumeRoleWithWebIdentityRequest::builder()
        .role_arn("r")
        .duration_seconds(900)
        .build();
    assert_eq!(request.to_string(), "{RoleArn: r,DurationSeconds: 900}");
    assert_eq!(AssumeRoleWithWebIdentityRequest::default().to_string(), "{}");
}

#[test]
fn debug_redacts_the_web_identity_token() {
    let request = AssumeRoleWithWebIdentityRequest::builder()
        .role_arn("r")
        .web_identity_token("secret-token")
        .build();
    let debug = format!("{:?}", request);
    assert!(debug.contains("*** Sensitive Data Redacted ***"));
    assert!(!debug.contains("secret-token"));
    assert!(debug.contains("role_arn: Some(\"r\")"));

    let builder_debug = format!(
        "{:?}",
        AssumeRoleWithWebIdentityRequest::builder().web_identity_token("secret-token")
    );
    assert!(!builder_debug.contains("secret-token"));
}

fn arb_request() -> impl Strategy<Value = AssumeRoleWithWebIdentityRequest> {
    (
        proptest::option::of("arn:aws:iam::[0-9]{3}:role/[a-z]{1,4}"),
        proptest::option::of("[a-z]{2,6}"),
        proptest::option::of("[A-Za-z0-9]{4,12}"),
        proptest::option::of("www\\.[a-z]{1,5}\\.com"),
        proptest::option::of(".{1,8}"),
        proptest::option::of(900..=3600i32),
    )
        .prop_map(|(role_arn, session, token, provider, policy, duration)| {
            AssumeRoleWithWebIdentityRequest::builder()
                .set_role_arn(role_arn)
                .set_role_session_name(session)
                .set_web_identity_token(token)
                .set_provider_id(provider)
                .set_policy(policy)
                .set_duration_seconds(duration)
                .build()
        })
}

proptest! {
    #[test]
    fn requests_equal_themselves(request in arb_request()) {
        prop_assert_eq!(&request, &request.clone());
    }

    #[test]
    fn equal_requests_hash_equal(a in arb_request(), b in arb_request()) {
        if a == b {
            prop_assert_eq!(hash_of(&a), hash_of(&b));
        }
        prop_assert_eq!(hash_of(&a), hash_of(&a.clone()));
    }
}
