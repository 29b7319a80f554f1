//! The four flight log commands.

use jiff::Timestamp;
use log::info;

use super::{CommandProcessor, MAX_FIELD_LEN};
use crate::{
    error::{FlightLogError, Result},
    models::{FlightStats, NewFlightLog, Owner, DEFAULT_DURATION},
    params::{LogFlight, RemoveFlight, ShowStats, ViewFlights},
    query::QueryEngine,
    response::Response,
};

/// Trimmed, non-empty, bounded value of a required field.
fn required(field: &str, value: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FlightLogError::invalid_input(field).with_reason("must not be empty"));
    }
    bounded(field, value)
}

/// Trimmed value of an optional field; blank counts as absent.
fn optional(field: &str, value: Option<&str>) -> Result<Option<String>> {
    match value.map(str::trim) {
        Some(value) if !value.is_empty() => bounded(field, value).map(Some),
        _ => Ok(None),
    }
}

fn bounded(field: &str, value: &str) -> Result<String> {
    if value.chars().count() > MAX_FIELD_LEN {
        return Err(FlightLogError::invalid_input(field)
            .with_reason(format!("must be at most {MAX_FIELD_LEN} characters")));
    }
    Ok(value.to_string())
}

/// The explicit pilot when given, otherwise the caller.
fn target_owner(caller: &Owner, pilot: Option<Owner>) -> Result<Owner> {
    let (field, owner) = match pilot {
        Some(pilot) => ("pilot", pilot),
        None => ("caller", caller.clone()),
    };

    let id = required(field, &owner.id)?;
    Ok(Owner::new(id, owner.label.trim()))
}

impl CommandProcessor {
    fn prefixed_callsign(&self, raw: &str) -> String {
        if self.callsign_prefix.is_empty() {
            raw.to_string()
        } else {
            format!("{} {raw}", self.callsign_prefix)
        }
    }

    /// Validate a log request into a store-bound record.
    pub fn validate_log(&self, caller: &Owner, params: LogFlight) -> Result<NewFlightLog> {
        let origin = required("origin", &params.origin)?;
        let destination = required("destination", &params.destination)?;
        let vehicle_type = required("vehicle type", &params.vehicle_type)?;
        let callsign = required("callsign", &params.callsign)?;
        let passenger_count = required("passengers", &params.passengers)?;
        let duration = optional("duration", params.duration.as_deref())?
            .unwrap_or_else(|| DEFAULT_DURATION.to_string());
        let image_url = optional("image", params.image_url.as_deref())?;
        let owner = target_owner(caller, params.pilot)?;

        Ok(NewFlightLog {
            owner_label: owner.display_name().to_string(),
            owner_id: owner.id,
            origin,
            destination,
            vehicle_type,
            callsign: self.prefixed_callsign(&callsign),
            passenger_count,
            duration,
            image_url,
        })
    }

    /// Log a flight and confirm it with a public card.
    ///
    /// The card is built only after the store has confirmed the insert.
    pub async fn log_flight(&self, caller: &Owner, params: LogFlight) -> Result<Response> {
        let flight = self.validate_log(caller, params)?;
        let id = self.store.create(flight.clone()).await?;

        info!("Logged flight {id} ({}) for {}", flight.callsign, flight.owner_id);

        // created_at is only shown in the footer; the stored value may differ
        // by the time it took the store to answer
        let record = flight.into_record(id, Timestamp::now());

        Ok(Response::public_card(self.renderer.format_logged(&record)))
    }

    /// List the owner's flights, oldest first, as private blocks.
    pub async fn view_flights(&self, caller: &Owner, params: ViewFlights) -> Result<Response> {
        let owner = target_owner(caller, params.pilot)?;
        let records = QueryEngine::new(self.store.as_ref())
            .ordered_for(&owner.id)
            .await?;

        if records.is_empty() {
            return Err(FlightLogError::NoRecords {
                owner: owner.display_name().to_string(),
            });
        }

        Ok(Response::private_blocks(
            self.renderer.format_list(&owner, &records),
        ))
    }

    /// Remove the flight shown at a display index.
    ///
    /// The index is resolved to a record identity first and the delete
    /// targets that identity, never a recomputed position.
    pub async fn remove_flight(&self, caller: &Owner, params: RemoveFlight) -> Result<Response> {
        let owner = target_owner(caller, params.pilot)?;
        let query = QueryEngine::new(self.store.as_ref());
        let record = query.resolve_index(&owner, params.index).await?;

        if !self.store.delete(record.id).await? {
            // removed by someone else between resolve and delete
            let count = query.ordered_for(&owner.id).await?.len();
            return Err(if count == 0 {
                FlightLogError::NoRecords {
                    owner: owner.display_name().to_string(),
                }
            } else {
                FlightLogError::IndexOutOfRange {
                    index: params.index,
                    count,
                }
            });
        }

        info!("Removed flight {} for {}", record.id, owner.id);

        // resolve_index only succeeds for indexes >= 1
        let index = usize::try_from(params.index).unwrap_or_default();
        Ok(Response::private_text(
            self.renderer.format_removed(index, &owner, &record),
        ))
    }

    /// Summarize the owner's flights as a public card.
    pub async fn show_stats(&self, caller: &Owner, params: ShowStats) -> Result<Response> {
        let owner = target_owner(caller, params.pilot)?;
        // ordered so vehicle ties resolve the same way every time
        let records = QueryEngine::new(self.store.as_ref())
            .ordered_for(&owner.id)
            .await?;

        if records.is_empty() {
            return Err(FlightLogError::NoRecords {
                owner: owner.display_name().to_string(),
            });
        }

        let stats = FlightStats::from_records(&records);
        Ok(Response::public_card(
            self.renderer.format_stats(&owner, &stats),
        ))
    }
}
