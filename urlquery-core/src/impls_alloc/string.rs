use alloc::string::String;

use crate::macros::scalar_queryable;

scalar_queryable! {
    String => String,
}
