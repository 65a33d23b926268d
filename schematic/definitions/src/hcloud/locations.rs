//! Locations.

use std::sync::LazyLock;

use schematic_define::prelude::*;

use super::common::{NETWORK_ZONE, collection, entity, list_query};

pub static LOCATION: LazyLock<Schema> = LazyLock::new(|| {
    ObjectSchema::named("Location")
        .required("id", Schema::integer())
        .required("name", Schema::string())
        .required("description", Schema::string())
        .required("country", Schema::string())
        .required("city", Schema::string())
        .required("latitude", Schema::number())
        .required("longitude", Schema::number())
        .required("network_zone", Schema::reference(&NETWORK_ZONE))
        .passthrough()
        .into()
});

pub static LIST_LOCATIONS_QUERY: LazyLock<Schema> = LazyLock::new(|| {
    list_query("ListLocationsQuery")
        .optional("name", Schema::string())
        .into()
});

pub static LIST_LOCATIONS_RESPONSE: LazyLock<Schema> =
    LazyLock::new(|| collection("ListLocationsResponse", "locations", &LOCATION));

pub static LOCATION_RESPONSE: LazyLock<Schema> =
    LazyLock::new(|| entity("LocationResponse", "location", &LOCATION));
