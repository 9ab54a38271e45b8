use citadel_test_utils::prelude::*;

use super::*;
