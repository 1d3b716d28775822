///Full page. Sortable.js fires `end` on the form after a drop, htmx then posts the
///hidden inputs in their new DOM order and swaps the returned fragment in.
pub const INDEX_PAGE: &str = "\
<!DOCTYPE html>
<html lang=\"en\">
<head>
  <meta charset=\"utf-8\">
  <title>{}</title>
  <script src=\"https://unpkg.com/htmx.org@1.9.12\"></script>
  <script src=\"https://cdn.jsdelivr.net/npm/sortablejs@1.15.2/Sortable.min.js\"></script>
</head>
<body>
  <h1>{}</h1>
  <p>Drag and drop movies to reorder them!</p>
  <form class=\"sortable\" hx-post=\"/sort/\" hx-trigger=\"end\" hx-target=\"this\" hx-swap=\"innerHTML\">
{}
  </form>
  <script>
    htmx.onLoad(function (content) {{
      content.querySelectorAll(\".sortable\").forEach(function (sortable) {{
        new Sortable(sortable, {{ animation: 150, ghostClass: \"dragging\" }});
      }});
    }});
  </script>
</body>
</html>
";

///One draggable row. The hidden input carries the item's current index.
pub const MOVIE_ITEM: &str = "    <div class=\"movie\"><input type=\"hidden\" name=\"{}\" value=\"{}\">{}</div>\n";
