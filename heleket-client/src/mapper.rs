//! Response mapping.
//!
//! Converts the raw decoded JSON of a success response into the typed
//! entities of `heleket-types`. Mapping is fail-fast: a single malformed
//! element inside a list fails the whole call - partial results are not
//! meaningful for financial records.

use serde::de::DeserializeOwned;
use serde_json::Value;

use heleket_types::{Balance, Balances, Course, Currency, Discount, Error, Payment, Service};

/// Extracts the top-level `result` payload.
///
/// A success response without `result` is always malformed; the gateway's
/// failure shapes are reported through non-success statuses instead.
pub fn result_value(body: Value) -> Result<Value, Error> {
    match body {
        Value::Object(mut map) => map
            .remove("result")
            .ok_or_else(|| Error::MalformedResponse("missing top-level 'result' key".into())),
        _ => Err(Error::MalformedResponse(
            "response body is not a JSON object".into(),
        )),
    }
}

/// Decodes one entity from a raw JSON value.
fn entity<T: DeserializeOwned>(value: Value, what: &str) -> Result<T, Error> {
    serde_json::from_value(value)
        .map_err(|e| Error::MalformedResponse(format!("invalid {}: {}", what, e)))
}

/// Decodes every element of a raw JSON array independently.
fn entity_list<T: DeserializeOwned>(value: Value, what: &str) -> Result<Vec<T>, Error> {
    let Value::Array(items) = value else {
        return Err(Error::MalformedResponse(format!(
            "expected a list of {}s",
            what
        )));
    };
    items.into_iter().map(|item| entity(item, what)).collect()
}

/// Maps a payment response.
pub fn payment(body: Value) -> Result<Payment, Error> {
    entity(result_value(body)?, "payment")
}

/// Maps an exchange-rate listing, optionally filtering by target currency.
///
/// When a filter set is supplied, elements whose raw `to` field is not a
/// member are discarded before construction; relative order of the rest is
/// preserved as received, since the gateway returns a fixed currency
/// priority ordering.
pub fn courses(body: Value, targets: Option<&[Currency]>) -> Result<Vec<Course>, Error> {
    let Value::Array(items) = result_value(body)? else {
        return Err(Error::MalformedResponse("expected a list of courses".into()));
    };

    let mut out = Vec::with_capacity(items.len());
    for item in items {
        if let Some(targets) = targets {
            let target = item
                .get("to")
                .and_then(Value::as_str)
                .ok_or_else(|| Error::MalformedResponse("course element without 'to'".into()))?;
            if !targets.iter().any(|c| c.code() == target) {
                continue;
            }
        }
        out.push(entity(item, "course")?);
    }
    Ok(out)
}

/// Maps a balance response into its (merchant, user) scopes.
///
/// An absent scope key yields an empty sequence for that scope, not an
/// error.
pub fn balances(body: Value) -> Result<Balances, Error> {
    let result = result_value(body)?;
    let sheet = result
        .get(0)
        .and_then(|first| first.get("balance"))
        .cloned()
        .ok_or_else(|| Error::MalformedResponse("missing 'balance' object".into()))?;

    let scope = |key: &str| -> Result<Vec<Balance>, Error> {
        match sheet.get(key) {
            Some(value) => entity_list(value.clone(), "balance"),
            None => Ok(Vec::new()),
        }
    };

    Ok(Balances {
        merchant: scope("merchant")?,
        user: scope("user")?,
    })
}

/// Maps a services-info response.
pub fn services(body: Value) -> Result<Vec<Service>, Error> {
    entity_list(result_value(body)?, "service")
}

/// Maps a discount listing.
pub fn discounts(body: Value) -> Result<Vec<Discount>, Error> {
    entity_list(result_value(body)?, "discount")
}

/// Maps a single-discount response.
pub fn discount(body: Value) -> Result<Discount, Error> {
    entity(result_value(body)?, "discount")
}

/// Extracts the QR image data URL.
pub fn qr_image(body: Value) -> Result<String, Error> {
    result_value(body)?
        .get("image")
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| Error::MalformedResponse("missing 'image' field".into()))
}
