pub mod event;
pub mod fcm;
pub mod message;
pub mod notification;
pub mod payload;
pub mod status;
pub mod target;
pub mod token;
pub mod validation;
