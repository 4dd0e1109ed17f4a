//! Transport layer: HTTP and wire-format details (form encoding, JSON decoding, signing).

mod envelope;
mod lenient;
mod send_sms;
mod sign;
mod signature;
mod template;

pub use envelope::{Decoded, TransportError, decode_error_body};
pub use send_sms::{
    SEND_BATCH_SMS_ACTION, SEND_SMS_ACTION, decode_send_sms_json_response,
    encode_send_batch_sms_form, encode_send_sms_form,
};
pub use sign::{
    ADD_SMS_SIGN_ACTION, DELETE_SMS_SIGN_ACTION, MODIFY_SMS_SIGN_ACTION, QUERY_SMS_SIGN_ACTION,
    QUERY_SMS_SIGN_LIST_ACTION, decode_sign_json_response, decode_sign_list_json_response,
    decode_sign_status_json_response, encode_add_sms_sign_form, encode_modify_sms_sign_form,
    encode_pagination_form, encode_sign_name_form,
};
pub use signature::{common_params, sign_params};
pub use template::{
    ADD_SMS_TEMPLATE_ACTION, DELETE_SMS_TEMPLATE_ACTION, MODIFY_SMS_TEMPLATE_ACTION,
    QUERY_SMS_TEMPLATE_ACTION, QUERY_SMS_TEMPLATE_LIST_ACTION, decode_template_json_response,
    decode_template_list_json_response, decode_template_status_json_response,
    encode_add_sms_template_form, encode_modify_sms_template_form, encode_template_code_form,
};
