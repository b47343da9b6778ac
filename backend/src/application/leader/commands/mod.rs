pub mod send_invitations;
pub mod submit_self_assessment;
