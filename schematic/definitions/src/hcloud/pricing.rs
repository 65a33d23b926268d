//! Account-wide price list.

use std::sync::LazyLock;

use schematic_define::prelude::*;

use super::common::{PRICE, PRICE_PER_TIME};
use super::server_types::SERVER_TYPE_PRICE;

pub static SERVER_TYPE_PRICING: LazyLock<Schema> = LazyLock::new(|| {
    ObjectSchema::named("ServerTypePricing")
        .required("id", Schema::integer())
        .required("name", Schema::string())
        .required("prices", Schema::array(Schema::reference(&SERVER_TYPE_PRICE)))
        .passthrough()
        .into()
});

pub static PRICING: LazyLock<Schema> = LazyLock::new(|| {
    ObjectSchema::named("Pricing")
        .required("currency", Schema::string())
        .required("vat_rate", Schema::string())
        .required(
            "image",
            ObjectSchema::new()
                .required("price_per_gb_month", Schema::reference(&PRICE))
                .passthrough()
                .into(),
        )
        .required(
            "server_backup",
            ObjectSchema::new()
                .required("percentage", Schema::string())
                .passthrough()
                .into(),
        )
        .required(
            "server_types",
            Schema::array(Schema::reference(&SERVER_TYPE_PRICING)),
        )
        .required(
            "primary_ips",
            Schema::array(
                ObjectSchema::new()
                    .required("type", Schema::string())
                    .required("prices", Schema::array(Schema::reference(&PRICE_PER_TIME)))
                    .passthrough()
                    .into(),
            ),
        )
        .passthrough()
        .into()
});

pub static PRICING_RESPONSE: LazyLock<Schema> = LazyLock::new(|| {
    ObjectSchema::named("PricingResponse")
        .required("pricing", Schema::reference(&PRICING))
        .passthrough()
        .into()
});
