//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the hotel
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::availability::ranges_overlap;
use crate::error::{BookingError, BookingResult};
use crate::models::{Booking, Customer, Room};
use crate::store::check_ids;

use super::types::{BookingsConfig, CustomersConfig, HotelConfig, RoomsConfig, ServerConfig};

/// Loads and provides access to the hotel configuration.
///
/// # Directory Structure
///
/// ```text
/// config/hotel/
/// ├── server.yaml     # Listen address
/// ├── rooms.yaml      # Rooms, in search order
/// ├── customers.yaml  # Customers
/// └── bookings.yaml   # Optional pre-existing bookings
/// ```
///
/// Seed data is checked on load: ids must be positive and unique per kind,
/// bookings must reference known rooms and customers, have ordered dates,
/// and active bookings must not overlap on the same room.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: HotelConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// - [`BookingError::ConfigNotFound`] if a required file is missing
    /// - [`BookingError::ConfigParseError`] if a file is not valid YAML or
    ///   the seed data is inconsistent
    ///
    /// # Example
    ///
    /// ```no_run
    /// use hotel_booking::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/hotel")?;
    /// # Ok::<(), hotel_booking::error::BookingError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> BookingResult<Self> {
        let path = path.as_ref();

        let server = Self::load_yaml::<ServerConfig>(&path.join("server.yaml"))?;
        let rooms = Self::load_yaml::<RoomsConfig>(&path.join("rooms.yaml"))?.rooms;
        let customers = Self::load_yaml::<CustomersConfig>(&path.join("customers.yaml"))?.customers;

        let bookings_path = path.join("bookings.yaml");
        let bookings = if bookings_path.exists() {
            Self::load_yaml::<BookingsConfig>(&bookings_path)?.bookings
        } else {
            Vec::new()
        };

        let config = HotelConfig {
            server,
            rooms,
            customers,
            bookings,
        };
        Self::validate(&config).map_err(|message| BookingError::ConfigParseError {
            path: path.display().to_string(),
            message,
        })?;

        info!(
            path = %path.display(),
            rooms = config.rooms.len(),
            customers = config.customers.len(),
            bookings = config.bookings.len(),
            "Configuration loaded"
        );

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> BookingResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| BookingError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| BookingError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn validate(config: &HotelConfig) -> Result<(), String> {
        check_ids(&config.rooms)?;
        check_ids(&config.customers)?;
        check_ids(&config.bookings)?;

        for (i, booking) in config.bookings.iter().enumerate() {
            if booking.start_date > booking.end_date {
                return Err(format!(
                    "booking {} starts after it ends ({} > {})",
                    booking.id, booking.start_date, booking.end_date
                ));
            }
            if !config.rooms.iter().any(|r| r.id == booking.room_id) {
                return Err(format!(
                    "booking {} references unknown room {}",
                    booking.id, booking.room_id
                ));
            }
            if !config.customers.iter().any(|c| c.id == booking.customer_id) {
                return Err(format!(
                    "booking {} references unknown customer {}",
                    booking.id, booking.customer_id
                ));
            }
            let clash = config.bookings[..i].iter().find(|other| {
                other.is_active
                    && booking.is_active
                    && other.room_id == booking.room_id
                    && ranges_overlap(
                        other.start_date,
                        other.end_date,
                        booking.start_date,
                        booking.end_date,
                    )
            });
            if let Some(other) = clash {
                return Err(format!(
                    "bookings {} and {} overlap on room {}",
                    other.id, booking.id, booking.room_id
                ));
            }
        }

        Ok(())
    }

    /// Returns the underlying hotel configuration.
    pub fn config(&self) -> &HotelConfig {
        &self.config
    }

    /// Returns the server settings.
    pub fn server(&self) -> &ServerConfig {
        &self.config.server
    }

    /// Returns the seed rooms.
    pub fn rooms(&self) -> &[Room] {
        &self.config.rooms
    }

    /// Returns the seed customers.
    pub fn customers(&self) -> &[Customer] {
        &self.config.customers
    }

    /// Returns the seed bookings.
    pub fn bookings(&self) -> &[Booking] {
        &self.config.bookings
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn config_path() -> &'static str {
        "./config/hotel"
    }

    /// Writes the given files into a temp directory removed on drop.
    fn write_config(files: &[(&str, &str)]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for (file, content) in files {
            fs::write(dir.path().join(file), content).unwrap();
        }
        dir
    }

    const SERVER: &str = "host: 0.0.0.0\nport: 9000\n";
    const ROOMS: &str = "rooms:\n  - id: 1\n    description: A\n  - id: 2\n    description: B\n";
    const CUSTOMERS: &str = "customers:\n  - id: 1\n    name: CustomerA\n    email: a@example.com\n";

    #[test]
    fn test_load_valid_configuration() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert!(!loader.rooms().is_empty());
        assert!(!loader.customers().is_empty());
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");
        assert!(matches!(result, Err(BookingError::ConfigNotFound { .. })));
    }

    #[test]
    fn test_bookings_file_is_optional() {
        let dir = write_config(&[
            ("server.yaml", SERVER),
            ("rooms.yaml", ROOMS),
            ("customers.yaml", CUSTOMERS),
        ]);

        let loader = ConfigLoader::load(dir.path()).unwrap();
        assert!(loader.bookings().is_empty());
        assert_eq!(loader.server().bind_address(), "0.0.0.0:9000");
        assert_eq!(loader.rooms().len(), 2);
    }

    #[test]
    fn test_config_dir_is_cleaned_up_on_drop() {
        let dir = write_config(&[("server.yaml", SERVER)]);
        let path = dir.path().to_path_buf();
        assert!(path.join("server.yaml").exists());

        drop(dir);
        assert!(!path.exists());
    }

    #[test]
    fn test_server_defaults_apply() {
        let dir = write_config(&[
            ("server.yaml", "{}\n"),
            ("rooms.yaml", ROOMS),
            ("customers.yaml", CUSTOMERS),
        ]);

        let loader = ConfigLoader::load(dir.path()).unwrap();
        assert_eq!(loader.server(), &ServerConfig::default());
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        let dir = write_config(&[
            ("server.yaml", SERVER),
            ("rooms.yaml", "rooms: [unclosed\n"),
            ("customers.yaml", CUSTOMERS),
        ]);

        let result = ConfigLoader::load(dir.path());
        assert!(matches!(result, Err(BookingError::ConfigParseError { .. })));
    }

    #[test]
    fn test_duplicate_room_ids_rejected() {
        let dir = write_config(&[
            ("server.yaml", SERVER),
            (
                "rooms.yaml",
                "rooms:\n  - id: 1\n    description: A\n  - id: 1\n    description: B\n",
            ),
            ("customers.yaml", CUSTOMERS),
        ]);

        match ConfigLoader::load(dir.path()) {
            Err(BookingError::ConfigParseError { message, .. }) => {
                assert_eq!(message, "duplicate room id 1");
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_overlapping_active_seed_bookings_rejected() {
        let bookings = "bookings:
  - id: 1
    start_date: 2030-01-01
    end_date: 2030-01-03
    is_active: true
    customer_id: 1
    room_id: 1
  - id: 2
    start_date: 2030-01-03
    end_date: 2030-01-04
    is_active: true
    customer_id: 1
    room_id: 1
";
        let dir = write_config(&[
            ("server.yaml", SERVER),
            ("rooms.yaml", ROOMS),
            ("customers.yaml", CUSTOMERS),
            ("bookings.yaml", bookings),
        ]);

        match ConfigLoader::load(dir.path()) {
            Err(BookingError::ConfigParseError { message, .. }) => {
                assert_eq!(message, "bookings 1 and 2 overlap on room 1");
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_booking_with_unknown_customer_rejected() {
        let bookings = "bookings:
  - id: 1
    start_date: 2030-01-01
    end_date: 2030-01-03
    is_active: true
    customer_id: 42
    room_id: 1
";
        let dir = write_config(&[
            ("server.yaml", SERVER),
            ("rooms.yaml", ROOMS),
            ("customers.yaml", CUSTOMERS),
            ("bookings.yaml", bookings),
        ]);

        assert!(matches!(
            ConfigLoader::load(dir.path()),
            Err(BookingError::ConfigParseError { .. })
        ));
    }
}
