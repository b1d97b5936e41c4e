pub trait SearchField: Send + Sync {
    fn read_value(&self) -> String;
    fn clear_value(&self);
}
