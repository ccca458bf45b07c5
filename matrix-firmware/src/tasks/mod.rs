// Task-Modul: Enthält alle Embassy Tasks
//
// Die Engine-Operationen sind Futures auf dem Device. Ein Task
// kombiniert sie mit join/select, Abbruch läuft über CancelToken.

pub mod matrix;

// Re-export Tasks für einfachen Import
pub use matrix::matrix_app_task;
