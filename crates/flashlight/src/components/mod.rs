pub mod flashlight;
