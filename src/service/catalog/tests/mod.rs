
use mitchdae_test_utils::prelude::*;

use crate::service::catalog::CatalogService;
