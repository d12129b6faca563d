//! Server-rendered HTML pages.
//!
//! Pages are plain format!-built strings; every interpolated user value goes
//! through `escape`.

use crate::store::models::{Board, Category, Document, Task};

use super::session::SessionUser;

/// A dashboard column: one category plus the tasks referencing it.
pub struct Column<'a> {
    pub category: &'a Category,
    pub tasks: Vec<&'a Task>,
}

/// Group a board's tasks by category, preserving task order within each
/// column (the order encodes drag-and-drop position).
pub fn board_columns(board: &Board) -> Vec<Column<'_>> {
    board
        .categories
        .iter()
        .map(|category| Column {
            category,
            tasks: board
                .tasks
                .iter()
                .filter(|t| t.category_id == category.id)
                .collect(),
        })
        .collect()
}

/// Minimal HTML escaping for interpolated values.
pub fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title} - KanbanPro</title>
<style>
body {{ font-family: -apple-system, "Segoe UI", Roboto, sans-serif; margin: 0; background: #f4f5f7; color: #172b4d; }}
header {{ background: #1a2c56; color: white; padding: 12px 24px; display: flex; justify-content: space-between; align-items: center; }}
header a {{ color: white; text-decoration: none; margin-left: 16px; }}
main {{ padding: 24px; }}
.board {{ display: flex; gap: 16px; align-items: flex-start; overflow-x: auto; }}
.column {{ background: #ebecf0; border-radius: 8px; padding: 12px; min-width: 260px; }}
.task {{ background: white; border-radius: 6px; padding: 8px 12px; margin: 8px 0; box-shadow: 0 1px 2px rgba(0,0,0,0.15); }}
.task .meta {{ color: #6b778c; font-size: 0.8em; }}
.error {{ color: #c0392b; margin: 8px 0; }}
form.inline {{ display: inline; }}
input, select, button {{ margin: 2px 0; }}
</style>
</head>
<body>
<header>
<strong>KanbanPro</strong>
<nav><a href="/">Inicio</a><a href="/dashboard">Dashboard</a><a href="/login">Login</a></nav>
</header>
<main>
{body}
</main>
</body>
</html>
"#
    )
}

pub fn home_page() -> String {
    layout(
        "Inicio",
        r#"<h1>Organiza tu trabajo con KanbanPro</h1>
<p>Tableros, columnas y tareas en un solo lugar.</p>
<p><a href="/empezar">Empezar</a> &middot; <a href="/login">Iniciar sesi&oacute;n</a></p>"#,
    )
}

pub fn onboarding_page() -> String {
    layout(
        "Empezar",
        r#"<h1>Empezar</h1>
<p>Crea tu primer tablero desde el dashboard.</p>
<form method="post" action="/empezar"><button type="submit">Ir al dashboard</button></form>"#,
    )
}

/// The login page doubles as both steps of the email flow: the code form is
/// only rendered after step 1, with the email carried along.
pub fn login_page(email: Option<&str>, show_code: bool, error: Option<&str>) -> String {
    let error_html = error
        .map(|e| format!(r#"<p class="error">{}</p>"#, escape(e)))
        .unwrap_or_default();

    let form_html = if show_code {
        let email = escape(email.unwrap_or_default());
        format!(
            r#"<form method="post" action="/login-code">
<input type="hidden" name="email" value="{email}">
<p>Hemos enviado un c&oacute;digo a <strong>{email}</strong>.</p>
<label>C&oacute;digo <input type="text" name="code" autofocus></label>
<button type="submit">Verificar</button>
</form>"#
        )
    } else {
        r#"<form method="post" action="/login-email">
<label>Correo <input type="email" name="email"></label>
<button type="submit">Continuar</button>
</form>
<p>O entra con:
<a href="/auth/google">Google</a> &middot;
<a href="/auth/apple">Apple</a> &middot;
<a href="/auth/microsoft">Microsoft</a></p>"#
            .to_string()
    };

    layout("Login", &format!("<h1>Login</h1>\n{error_html}{form_html}"))
}

/// The board view. `board` is the selected board (dashboard honors
/// `?boardId=`); `None` renders the empty state.
pub fn dashboard_page(doc: &Document, board: Option<&Board>, user: Option<&SessionUser>) -> String {
    let user_html = match user {
        Some(u) => format!(
            r#"<p>Sesi&oacute;n: <strong>{}</strong>
<form class="inline" method="post" action="/logout"><button type="submit">Salir</button></form></p>"#,
            escape(&u.email)
        ),
        None => String::new(),
    };

    let Some(board) = board else {
        let body = format!(
            r#"{user_html}<h1>Dashboard</h1>
<p>No hay tableros todav&iacute;a.</p>
{}"#,
            new_board_form()
        );
        return layout("Dashboard", &body);
    };

    let board_picker = doc
        .boards
        .iter()
        .map(|b| {
            let selected = if b.id == board.id { " selected" } else { "" };
            format!(
                r#"<option value="{}"{selected}>{}</option>"#,
                escape(&b.id),
                escape(&b.name)
            )
        })
        .collect::<String>();

    let columns_html = board_columns(board)
        .iter()
        .map(|column| column_html(column))
        .collect::<String>();

    let body = format!(
        r#"{user_html}<h1>{board_name}</h1>
<form method="get" action="/dashboard">
<select name="boardId" onchange="this.form.submit()">{board_picker}</select>
</form>
{new_board}
<form method="post" action="/nueva-categoria">
<input type="text" name="name" placeholder="Nueva columna">
<button type="submit">A&ntilde;adir columna</button>
</form>
<div class="board">
{columns_html}
</div>
<script>
document.querySelectorAll('.task').forEach(function (el) {{
  el.addEventListener('dragstart', function (e) {{
    e.dataTransfer.setData('text/plain', el.dataset.taskId);
  }});
}});
document.querySelectorAll('.column').forEach(function (col) {{
  col.addEventListener('dragover', function (e) {{ e.preventDefault(); }});
  col.addEventListener('drop', function (e) {{
    e.preventDefault();
    var taskId = e.dataTransfer.getData('text/plain');
    var position = col.querySelectorAll('.task').length;
    fetch('/orden-tareas', {{
      method: 'POST',
      headers: {{ 'Content-Type': 'application/x-www-form-urlencoded' }},
      body: new URLSearchParams({{
        taskId: taskId,
        categoryId: col.dataset.categoryId,
        position: position
      }})
    }}).then(function () {{ window.location.reload(); }});
  }});
}});
</script>"#,
        board_name = escape(&board.name),
        new_board = new_board_form(),
    );

    layout("Dashboard", &body)
}

fn new_board_form() -> &'static str {
    r#"<form method="post" action="/nuevo-tablero">
<input type="text" name="name" placeholder="Nuevo tablero">
<button type="submit">Crear tablero</button>
</form>"#
}

fn column_html(column: &Column<'_>) -> String {
    let category = column.category;
    let tasks_html = column.tasks.iter().map(|t| task_html(t)).collect::<String>();

    format!(
        r#"<div class="column" data-category-id="{id}">
<h2>{name}</h2>
<form class="inline" method="post" action="/renombrar-categoria">
<input type="hidden" name="categoryId" value="{id}">
<input type="text" name="name" placeholder="Renombrar">
<button type="submit">OK</button>
</form>
<form class="inline" method="post" action="/eliminar-categoria">
<input type="hidden" name="categoryId" value="{id}">
<button type="submit">Eliminar</button>
</form>
{tasks_html}
<form method="post" action="/nueva-tarea">
<input type="hidden" name="categoryId" value="{id}">
<input type="text" name="title" placeholder="Nueva tarea">
<input type="date" name="dueDate">
<button type="submit">A&ntilde;adir</button>
</form>
</div>"#,
        id = escape(&category.id),
        name = escape(&category.name),
    )
}

fn task_html(task: &Task) -> String {
    format!(
        r#"<div class="task" draggable="true" data-task-id="{id}">
<strong>{title}</strong>
<p>{description}</p>
<p class="meta">Estado: {status} &middot; Creada: {created_at}{due}</p>
<form class="inline" method="post" action="/cambiar-estado">
<input type="hidden" name="taskId" value="{id}">
<select name="status">
<option value="todo">todo</option>
<option value="doing">doing</option>
<option value="done">done</option>
</select>
<button type="submit">Estado</button>
</form>
<form class="inline" method="post" action="/editar-tarea">
<input type="hidden" name="taskId" value="{id}">
<input type="text" name="title" value="{title}">
<input type="text" name="description" value="{description}">
<input type="date" name="dueDate" value="{due_date}">
<button type="submit">Guardar</button>
</form>
<form class="inline" method="post" action="/eliminar-tarea">
<input type="hidden" name="taskId" value="{id}">
<button type="submit">Borrar</button>
</form>
</div>"#,
        id = escape(&task.id),
        title = escape(&task.title),
        description = escape(&task.description),
        status = escape(&task.status),
        created_at = escape(&task.created_at),
        due_date = escape(&task.due_date),
        due = if task.due_date.is_empty() {
            String::new()
        } else {
            format!(" &middot; Entrega: {}", escape(&task.due_date))
        },
    )
}
