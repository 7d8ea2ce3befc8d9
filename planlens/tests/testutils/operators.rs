//! Sample plan operators

use planlens::{Destination, InputInfo, Keyspace, PlanDescription, PlanNode, TabletType};

/// Leaf operator sending a query to one or more shards
pub struct Route {
    pub variant: &'static str,
    pub keyspace: &'static str,
    pub query: &'static str,
    pub field_query: &'static str,
    pub table: &'static str,
}

impl Route {
    pub fn scatter(query: &'static str) -> Self {
        Self {
            variant: "Scatter",
            keyspace: "user",
            query,
            field_query: "",
            table: "",
        }
    }
}

impl PlanNode for Route {
    fn describe(&self) -> PlanDescription {
        PlanDescription::new("Route")
            .with_variant(self.variant)
            .with_keyspace(Keyspace::new(self.keyspace, true))
            .with_other("Query", self.query)
            .with_other("FieldQuery", self.field_query)
            .with_other("Table", self.table)
    }

    fn inputs(&self) -> (Vec<&dyn PlanNode>, Option<Vec<InputInfo>>) {
        (vec![], None)
    }
}

/// Leaf operator pinned to an explicit destination
pub struct SendToShard {
    pub destination: Destination,
    pub tablet_type: TabletType,
    pub query: &'static str,
}

impl PlanNode for SendToShard {
    fn describe(&self) -> PlanDescription {
        PlanDescription::new("Send")
            .with_keyspace(Keyspace::new("main", false))
            .with_destination(self.destination.clone())
            .with_tablet_type(self.tablet_type)
            .with_other("Query", self.query)
    }

    fn inputs(&self) -> (Vec<&dyn PlanNode>, Option<Vec<InputInfo>>) {
        (vec![], None)
    }
}

/// Unary row limit
pub struct Limit {
    pub count: i64,
    pub offset: i64,
    pub input: Box<dyn PlanNode>,
}

impl PlanNode for Limit {
    fn describe(&self) -> PlanDescription {
        PlanDescription::new("Limit")
            .with_other("Count", self.count)
            .with_other("Offset", self.offset)
    }

    fn inputs(&self) -> (Vec<&dyn PlanNode>, Option<Vec<InputInfo>>) {
        (vec![&*self.input], None)
    }
}

/// Unary projection
pub struct Projection {
    pub columns: Vec<String>,
    pub input: Box<dyn PlanNode>,
}

impl PlanNode for Projection {
    fn describe(&self) -> PlanDescription {
        PlanDescription::new("Projection").with_other("Expressions", self.columns.clone())
    }

    fn inputs(&self) -> (Vec<&dyn PlanNode>, Option<Vec<InputInfo>>) {
        (vec![&*self.input], None)
    }
}

/// Nested-loop join naming its inputs Outer and Inner
pub struct Join {
    pub left_join: bool,
    pub columns: &'static str,
    pub left: Box<dyn PlanNode>,
    pub right: Box<dyn PlanNode>,
}

impl PlanNode for Join {
    fn describe(&self) -> PlanDescription {
        let variant = if self.left_join { "LeftJoin" } else { "Join" };
        PlanDescription::new("Join")
            .with_variant(variant)
            .with_other("JoinColumnIndexes", self.columns)
    }

    fn inputs(&self) -> (Vec<&dyn PlanNode>, Option<Vec<InputInfo>>) {
        (
            vec![&*self.left, &*self.right],
            Some(vec![InputInfo::named("Outer"), InputInfo::named("Inner")]),
        )
    }
}

/// Duplicate elimination holding its only input inline
pub struct Distinct {
    pub inner: Route,
}

impl PlanNode for Distinct {
    fn describe(&self) -> PlanDescription {
        PlanDescription::new("Distinct")
    }

    fn inputs(&self) -> (Vec<&dyn PlanNode>, Option<Vec<InputInfo>>) {
        let inputs: Vec<&dyn PlanNode> = vec![&self.inner];
        (inputs, None)
    }
}

/// Operator with an arbitrary number of inputs and no metadata
pub struct Concatenate {
    pub sources: Vec<Box<dyn PlanNode>>,
}

impl PlanNode for Concatenate {
    fn describe(&self) -> PlanDescription {
        PlanDescription::new("Concatenate")
    }

    fn inputs(&self) -> (Vec<&dyn PlanNode>, Option<Vec<InputInfo>>) {
        (self.sources.iter().map(|s| &**s as &dyn PlanNode).collect(), None)
    }
}

/// `Join(Limit(Route), Route)` sample plan
pub fn sample_join() -> Join {
    Join {
        left_join: false,
        columns: "-1,1",
        left: Box::new(Limit {
            count: 10,
            offset: 0,
            input: Box::new(Route::scatter("select id from user")),
        }),
        right: Box::new(Route {
            variant: "EqualUnique",
            keyspace: "user",
            query: "select name from user_extra where id = :id",
            field_query: "select name from user_extra where 1 != 1",
            table: "user_extra",
        }),
    }
}

/// A chain of `depth` operators: `Limit` wrappers over a single `Route`
pub fn limit_chain(depth: usize) -> Box<dyn PlanNode> {
    let mut node: Box<dyn PlanNode> = Box::new(Route::scatter("select 1"));
    for _ in 1..depth {
        node = Box::new(Limit {
            count: 1,
            offset: 0,
            input: node,
        });
    }
    node
}
