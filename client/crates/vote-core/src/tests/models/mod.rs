mod admin_form_state;
mod candidate;
mod role;
mod session;
mod wire_format;
