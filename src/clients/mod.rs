pub mod apns;
pub mod fcm;
