pub mod role_switcher;
