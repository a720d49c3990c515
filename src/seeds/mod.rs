pub mod demo_data_seed;
