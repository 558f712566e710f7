use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    /// City catalog and city tags
    Cities,
}
