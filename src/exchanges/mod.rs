pub mod btce;
