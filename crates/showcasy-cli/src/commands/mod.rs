pub mod check;
pub mod routes;
pub mod run;
pub mod theme;
