pub mod panic_hook;
