//! Size-ordering rule.

use super::super::Disk;

/// Checks whether `disk` may be placed on a stack whose top is `top`.
///
/// An empty stack accepts any disk; otherwise the top must be at least as
/// large as the incoming disk.
pub fn can_stack(top: Option<&Disk>, disk: &Disk) -> bool {
    top.is_none_or(|top| top.size() >= disk.size())
}
