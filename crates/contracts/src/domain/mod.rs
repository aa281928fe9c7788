pub mod a001_asset;
pub mod a002_supplier;
pub mod a003_depreciation_category;
pub mod a004_personnel;
pub mod common;
