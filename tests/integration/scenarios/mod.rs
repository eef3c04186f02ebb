pub mod progression;
