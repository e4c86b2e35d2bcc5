// Pipeline storage: serialization of the cleaned frame

pub mod csv_out;

pub use csv_out::persist_to_csv;
