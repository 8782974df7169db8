//! Turns raw form data into a [ValidatedRecord].

use crate::{
    Error,
    record::{RecordForm, ValidatedRecord},
};

impl RecordForm {
    /// Check the form and convert it into a record that can be stored.
    ///
    /// Text fields are trimmed of surrounding whitespace and `notes` defaults
    /// to an empty string. Numbers may be negative or zero, and the travel date
    /// is accepted in any format.
    ///
    /// # Errors
    ///
    /// This function will return a:
    /// - [Error::MissingFields] naming every required field that is absent or blank,
    /// - or [Error::InvalidNumber] naming every numeric field that is not a finite number.
    pub fn validate(self) -> Result<ValidatedRecord, Error> {
        let fields = [
            ("user_name", &self.user_name),
            ("travel_date", &self.travel_date),
            ("mode", &self.mode),
            ("origin", &self.origin),
            ("destination", &self.destination),
            ("distance_km", &self.distance_km),
            ("cost", &self.cost),
        ];

        let missing_fields = fields
            .iter()
            .filter(|(_, value)| trimmed(value).is_empty())
            .map(|(name, _)| *name)
            .collect::<Vec<_>>();

        if !missing_fields.is_empty() {
            return Err(Error::MissingFields(missing_fields));
        }

        let distance_km = parse_number(&self.distance_km);
        let cost = parse_number(&self.cost);

        let (distance_km, cost) = match (distance_km, cost) {
            (Some(distance_km), Some(cost)) => (distance_km, cost),
            (distance_km, cost) => {
                let mut invalid_fields = Vec::new();

                if distance_km.is_none() {
                    invalid_fields.push("distance_km");
                }

                if cost.is_none() {
                    invalid_fields.push("cost");
                }

                return Err(Error::InvalidNumber(invalid_fields));
            }
        };

        Ok(ValidatedRecord {
            user_name: trimmed(&self.user_name).to_owned(),
            travel_date: trimmed(&self.travel_date).to_owned(),
            mode: trimmed(&self.mode).to_owned(),
            origin: trimmed(&self.origin).to_owned(),
            destination: trimmed(&self.destination).to_owned(),
            distance_km,
            cost,
            notes: trimmed(&self.notes).to_owned(),
        })
    }
}

fn trimmed(value: &Option<String>) -> &str {
    value.as_deref().map(str::trim).unwrap_or_default()
}

fn parse_number(value: &Option<String>) -> Option<f64> {
    trimmed(value)
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
}
