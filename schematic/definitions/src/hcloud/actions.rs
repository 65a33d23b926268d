//! Actions: handles for asynchronous operations started by mutating calls.

use std::sync::LazyLock;

use schematic_define::prelude::*;

use super::common::{collection, list_query};

pub static ACTION_STATUS: LazyLock<Schema> = LazyLock::new(|| {
    Schema::named_enum("ActionStatus", &["running", "success", "error"])
});

pub static ACTION_ERROR: LazyLock<Schema> = LazyLock::new(|| {
    ObjectSchema::named("ActionError")
        .required("code", Schema::string())
        .required("message", Schema::string())
        .passthrough()
        .into()
});

/// A resource touched by an action.
pub static RESOURCE: LazyLock<Schema> = LazyLock::new(|| {
    ObjectSchema::named("Resource")
        .required("id", Schema::integer())
        .required("type", Schema::string())
        .passthrough()
        .into()
});

pub static ACTION: LazyLock<Schema> = LazyLock::new(|| {
    ObjectSchema::named("Action")
        .describe("An asynchronous operation tracked by id, status and progress")
        .required("id", Schema::integer())
        .required("command", Schema::string())
        .required("status", Schema::reference(&ACTION_STATUS))
        .required("progress", Schema::integer())
        .required("started", Schema::string())
        .required("finished", Schema::nullable(Schema::string()))
        .required("resources", Schema::array(Schema::reference(&RESOURCE)))
        .required("error", Schema::nullable(Schema::reference(&ACTION_ERROR)))
        .passthrough()
        .into()
});

pub static LIST_ACTIONS_QUERY: LazyLock<Schema> = LazyLock::new(|| {
    list_query("ListActionsQuery")
        .optional("id", Schema::array(Schema::integer()))
        .optional("status", Schema::array(Schema::reference(&ACTION_STATUS)))
        .into()
});

/// `{ actions: [Action], meta?: Meta }`, also returned by multi-action calls.
pub static LIST_ACTIONS_RESPONSE: LazyLock<Schema> =
    LazyLock::new(|| collection("ListActionsResponse", "actions", &ACTION));

/// `{ action: Action }`
pub static ACTION_RESPONSE: LazyLock<Schema> = LazyLock::new(|| {
    ObjectSchema::named("ActionResponse")
        .required("action", Schema::reference(&ACTION))
        .passthrough()
        .into()
});

/// Mutation envelope: `{ <singular>: item, action?: Action }`.
pub(crate) fn mutation(name: &'static str, singular: &'static str, item: SchemaRef) -> ObjectSchema {
    ObjectSchema::named(name)
        .required(singular, Schema::reference(item))
        .optional("action", Schema::reference(&ACTION))
        .passthrough()
}
