pub mod flasher;
