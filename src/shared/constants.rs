// =============================================================================
// COMMENT LIMITS
// =============================================================================

pub const COMMENT_AUTHOR_MAX_CHARS: u64 = 100;
pub const COMMENT_CONTENT_MAX_CHARS: u64 = 1000;

// =============================================================================
// CONTACT LIMITS
// =============================================================================

pub const CONTACT_NAME_MAX_CHARS: u64 = 100;
pub const CONTACT_EMAIL_MAX_CHARS: u64 = 255;
pub const CONTACT_SUBJECT_MAX_CHARS: u64 = 200;
pub const CONTACT_MESSAGE_MAX_CHARS: u64 = 2000;

/// Stored as the submitter origin when no forwarding header is present
pub const UNKNOWN_CLIENT_IP: &str = "unknown";
