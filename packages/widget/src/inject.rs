/// Error returned when the page has no element carrying the widget's
/// container id.
#[derive(Debug, thiserror::Error)]
#[error("Container with id '{0}' not found in page")]
pub struct ContainerNotFound(pub String);

/// Append `fragment` inside the element with id `container_id`, immediately
/// before that element's closing tag.
///
/// Existing children of the container and all markup outside it are
/// preserved byte for byte, so repeated site builds only ever add to the
/// widget's own output region.
///
/// # Errors
///
/// Returns [`ContainerNotFound`] if no element with the id exists in `page`
/// or its closing tag cannot be located. The caller is expected to treat
/// that as a no-op rather than a fatal condition.
pub fn append_to_container(
    page: &str,
    container_id: &str,
    fragment: &str,
) -> Result<String, ContainerNotFound> {
    let insert_at = container_close_position(page, container_id)
        .ok_or_else(|| ContainerNotFound(container_id.to_string()))?;

    let mut result = String::with_capacity(page.len() + fragment.len());
    result.push_str(&page[..insert_at]);
    result.push_str(fragment);
    result.push_str(&page[insert_at..]);
    Ok(result)
}

/// Byte offset of the container's closing tag, i.e. the position new
/// children are inserted at.
fn container_close_position(page: &str, container_id: &str) -> Option<usize> {
    let double_quoted = format!("id=\"{container_id}\"");
    let single_quoted = format!("id='{container_id}'");
    let id_at = page
        .find(&double_quoted)
        .or_else(|| page.find(&single_quoted))?;

    let tag_start = page[..id_at].rfind('<')?;
    let tag_name: String = page[tag_start + 1..]
        .chars()
        .take_while(char::is_ascii_alphanumeric)
        .collect();
    if tag_name.is_empty() {
        return None;
    }

    let open_end = tag_start + page[tag_start..].find('>')? + 1;
    // A self-closing container has no insertion point.
    if page[..open_end].ends_with("/>") {
        return None;
    }

    let open_marker = format!("<{tag_name}");
    let close_marker = format!("</{tag_name}>");

    // Scan forward from the opening tag, tracking nesting depth of
    // same-named elements, until the container's own closing tag.
    let mut depth = 1_usize;
    let mut cursor = open_end;
    loop {
        let rest = &page[cursor..];
        let close = rest.find(&close_marker)?;
        let open = rest.find(&open_marker).filter(|&at| {
            // `<div` must not match a longer tag name like `<divider`.
            rest[at + open_marker.len()..]
                .chars()
                .next()
                .is_none_or(|c| !c.is_ascii_alphanumeric())
        });

        match open {
            Some(at) if at < close => {
                depth += 1;
                cursor += at + open_marker.len();
            }
            _ => {
                depth -= 1;
                if depth == 0 {
                    return Some(cursor + close);
                }
                cursor += close + close_marker.len();
            }
        }
    }
}
