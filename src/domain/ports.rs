use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<String>;
}

pub trait ConfigProvider {
    /// 尚未驗證的 N，驗證交給引擎
    fn count(&self) -> i64;
    fn output_path(&self) -> &str;
    fn output_formats(&self) -> &[String];
    fn matches_only(&self) -> bool;
}
