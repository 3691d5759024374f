pub mod chart_data;
