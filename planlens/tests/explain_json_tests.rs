//! Explain JSON output for sample operator trees
//!
//! Field order matters here, so most assertions compare the encoded text
//! rather than a parsed `serde_json::Value` (whose maps are key-sorted).

#[path = "testutils/mod.rs"]
mod testutils;

use planlens::{
    describe_plan, encode, to_json, to_json_pretty, DescribeConfig, DescribeError, Destination,
    PlanDescription, PlanNode, TabletType,
};
use testutils::operators::{limit_chain, sample_join, Concatenate, Projection, Route, SendToShard};

#[test]
fn test_join_plan_explain() {
    let desc = describe_plan(&sample_join(), None).expect("describe failed");
    let json = to_json(&desc).expect("encode failed");

    assert_eq!(
        json,
        concat!(
            r#"{"OperatorType":"Join","Variant":"Join","JoinColumnIndexes":"-1,1","Inputs":["#,
            r#"{"InputName":"Outer","OperatorType":"Limit","Count":10,"Inputs":["#,
            r#"{"OperatorType":"Route","Variant":"Scatter","Keyspace":{"Name":"user","Sharded":true},"#,
            r#""Query":"select id from user"}]},"#,
            r#"{"InputName":"Inner","OperatorType":"Route","Variant":"EqualUnique","#,
            r#""Keyspace":{"Name":"user","Sharded":true},"#,
            r#""FieldQuery":"select name from user_extra where 1 != 1","#,
            r#""Query":"select name from user_extra where id = :id","Table":"user_extra"}]}"#
        )
    );
}

#[test]
fn test_leaf_has_no_inputs_key() {
    let desc = describe_plan(&Route::scatter("select 1"), None).unwrap();
    assert!(desc.inputs.is_empty());

    let json = to_json(&desc).unwrap();
    assert!(!json.contains("Inputs"));
}

#[test]
fn test_destination_and_tablet_type() {
    let send = SendToShard {
        destination: Destination::KeyRange(planlens::KeyRange {
            start: vec![],
            end: vec![0x80],
        }),
        tablet_type: TabletType::Primary,
        query: "delete from t",
    };
    let json = to_json(&describe_plan(&send, None).unwrap()).unwrap();
    assert_eq!(
        json,
        concat!(
            r#"{"OperatorType":"Send","Keyspace":{"Name":"main","Sharded":false},"#,
            r#""TargetDestination":"KeyRange(-80)","TargetTabletType":"PRIMARY","#,
            r#""Query":"delete from t"}"#
        )
    );
}

#[test]
fn test_unknown_tablet_type_is_omitted() {
    let send = SendToShard {
        destination: Destination::AllShards,
        tablet_type: TabletType::Unknown,
        query: "select 1",
    };
    let json = to_json(&describe_plan(&send, None).unwrap()).unwrap();
    assert!(json.contains(r#""TargetDestination":"AllShards()""#));
    assert!(!json.contains("TargetTabletType"));
}

#[test]
fn test_empty_list_extension_is_kept() {
    let projection = Projection {
        columns: vec![],
        input: Box::new(Route::scatter("select 1")),
    };
    let json = to_json(&describe_plan(&projection, None).unwrap()).unwrap();
    assert!(json.starts_with(r#"{"OperatorType":"Projection","Expressions":[],"Inputs":["#));
}

#[test]
fn test_extension_keys_are_sorted() {
    let desc = PlanDescription::new("Limit")
        .with_other("b", 1i64)
        .with_other("a", 2i64);
    assert_eq!(
        to_json(&desc).unwrap(),
        r#"{"OperatorType":"Limit","a":2,"b":1}"#
    );
}

#[test]
fn test_inputs_without_metadata_keep_order() {
    let sources: Vec<Box<dyn PlanNode>> = ["select 1", "select 2", "select 3"]
        .into_iter()
        .map(|query| Box::new(Route::scatter(query)) as Box<dyn PlanNode>)
        .collect();
    let concat = Concatenate { sources };
    let desc = describe_plan(&concat, None).unwrap();
    let value: serde_json::Value = serde_json::from_str(&to_json(&desc).unwrap()).unwrap();
    let queries: Vec<&str> = value["Inputs"]
        .as_array()
        .unwrap()
        .iter()
        .map(|input| input["Query"].as_str().unwrap())
        .collect();
    assert_eq!(queries, vec!["select 1", "select 2", "select 3"]);
    assert!(value["Inputs"][0].get("InputName").is_none());
}

#[test]
fn test_pretty_output_parses_to_same_document() {
    let desc = describe_plan(&sample_join(), None).unwrap();
    let compact: serde_json::Value = serde_json::from_str(&to_json(&desc).unwrap()).unwrap();
    let pretty: serde_json::Value =
        serde_json::from_str(&to_json_pretty(&desc).unwrap()).unwrap();
    assert_eq!(compact, pretty);
}

#[test]
fn test_deep_plan_is_rejected() {
    let plan = limit_chain(40);
    let desc = describe_plan(plan.as_ref(), None).unwrap();
    assert_eq!(desc.depth(), 40);

    let config = DescribeConfig::shallow();
    assert!(matches!(
        encode(&desc, &config, false),
        Err(DescribeError::DepthExceeded { limit: 32 })
    ));
    assert!(encode(&desc, &DescribeConfig::default(), false).is_ok());
}
