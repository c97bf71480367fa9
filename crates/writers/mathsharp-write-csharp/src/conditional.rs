//! `if(cond, then, else)` written as a function call over a sequence.

use crate::fragment::Fragment;
use mathsharp_core::{EmitError, NodeRef, Position};

/// Build `(cond ? (then) : else)` from the translated items of `sequence`.
///
/// Items are split at their top-level boundaries only, so an argument such
/// as `Math.Pow(x, 2)` or `m[i, j]` stays one part.
pub fn ternary(sequence: NodeRef<'_>, items: Vec<Fragment>) -> Result<Fragment, EmitError> {
    let list = Fragment::List(items);
    match list.parts().as_slice() {
        [cond, then, otherwise] => Ok(Fragment::conditional(
            (*cond).clone(),
            (*then).clone(),
            (*otherwise).clone(),
        )),
        _ => Err(EmitError::unsupported(Position::Conditional, sequence)),
    }
}
