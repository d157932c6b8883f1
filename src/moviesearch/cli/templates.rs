//! Minijinja templates for terminal output.
//!
//! Column widths and truncation are computed in `render.rs`; templates only
//! arrange pre-laid-out strings and pick styles through the `style` filter.

pub const FORM_TEMPLATE: &str = r#"{{ title | style("heading") }}
{% for field in fields %}  {{ field.label | style("label") }}  {{ field.value }}{{ field.note | style("muted") }}
{% endfor %}{% if not expanded %}  {{ hint | style("muted") }}
{% endif %}"#;

pub const PAGE_TEMPLATE: &str = r#"총 {{ total_count | style("count") }} 건    {{ "정렬" | style("muted") }} {{ sort_label }}
{{ header | style("header") }}
{% if empty %}{{ empty_message | style("muted") }}
{% else %}{% for row in rows %}{{ row }}
{% endfor %}{% endif %}{% if show_pager %}
{% if has_prev %}{{ "‹" | style("muted") }} {% endif %}{% for p in pages %}{% if p.current %}{{ p.label | style("current_page") }}{% else %}{{ p.label }}{% endif %} {% endfor %}{% if has_next %}{{ "›" | style("muted") }}{% endif %}
{% endif %}"#;

pub const MESSAGES_TEMPLATE: &str = r#"{% for message in messages %}{{ message.content | style(message.style) }}
{% endfor %}"#;

pub const CONFIG_TEMPLATE: &str = r#"{% for entry in entries %}{{ entry.key | style("label") }} = {{ entry.value }}
{% endfor %}"#;

pub const TEXT_LIST_TEMPLATE: &str = r#"{% if lines %}{% for line in lines %}{{ line }}
{% endfor %}{% else %}{{ empty_message | style("muted") }}
{% endif %}"#;
