pub mod alarm;
pub mod notification;
pub mod price;

pub use alarm::{Alarm, AlarmCondition, PriceType};
pub use notification::{NotificationKind, NotificationRecord};
pub use price::{PriceEntry, PriceSnapshot};
