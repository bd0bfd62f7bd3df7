pub mod sweeps;
