//! JSON key-value file storage backend.
//!
//! One file per record kind under the data directory, each holding a JSON
//! object mapping generated id to serialized record. Writes replace the
//! whole file atomically (temp file + rename).

pub mod connection;
mod kv_file;
pub mod medication_repository;
pub mod seizure_repository;

pub use connection::JsonConnection;
pub use medication_repository::MedicationRepository;
pub use seizure_repository::SeizureRepository;
