pub mod card;
pub mod country;
pub mod display;
pub mod ids;
pub mod link;
pub mod phone;

pub use card::{ExtractedFields, PhoneSlot, Phones, ScannedCard};
pub use country::{CountryCode, MALAYSIA_CALLING_CODE};
pub use display::format_phone_for_display;
pub use ids::CardId;
pub use link::{sms_uri, tel_uri, whatsapp_url};
pub use phone::{clean_phone, is_valid_phone_number, normalize_phone, to_dial_form};
