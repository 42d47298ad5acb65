mod toast_container;

pub use toast_container::ToastContainer;
