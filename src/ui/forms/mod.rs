//! Form rendering

mod contact_form;
mod field_renderer;
mod membership_form;

pub use contact_form::draw as draw_contact;
pub use field_renderer::field_widget;
pub use membership_form::draw as draw_membership;
