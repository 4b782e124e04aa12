pub mod whorl;
