// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul kapselt Hardware-Zugriffe hinter Traits,
// um Testbarkeit und Wartbarkeit zu verbessern.

pub mod matrix_writer;

pub use matrix_writer::RmtMatrixWriter;

#[cfg(test)]
pub use matrix_writer::MockMatrixWriter;
