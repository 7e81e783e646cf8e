use axum::response::Html;

/// URL input page
/// GET /
pub async fn ui_page() -> Html<&'static str> {
    Html(INDEX_HTML)
}

const INDEX_HTML: &str = r#"<!doctype html>
<html>
<head>
    <meta charset="utf-8" />
    <title>Validation Server — URL input</title>
    <style>
        body { font-family: Arial, Helvetica, sans-serif; max-width: 700px; margin: 40px auto; }
        label { display:block; margin-top: 12px; }
        input { width: 100%; padding: 8px; margin-top:4px; }
        button { margin-top: 12px; padding: 10px 16px; }
        pre { background:#f6f8fa; padding:12px; border-radius:6px; }
    </style>
</head>
<body>
    <h2>Validation Server — URL input</h2>
    <p>This page is only for entering the <strong>Users</strong> and <strong>Logs</strong> URLs that the validation server will use.
         Click <em>Save</em> to persist them. When you run the check, the server will read the saved URLs and use those endpoints.</p>

    <label>Players URL
        <input id="users_url" placeholder="https://example.com/players.json" />
    </label>
    <label>Logs URL
        <input id="logs_url" placeholder="https://example.com/points.json" />
    </label>

    <button id="saveBtn">Save</button>
    <button id="startBtn">Start check (uses saved URLs)</button>

    <h3>Result</h3>
    <pre id="result">Not started</pre>

    <script>
        // Load saved URLs on page load
        async function loadSaved(){
            try{
                const res = await fetch('/urls');
                if(res.ok){
                    const data = await res.json();
                    document.getElementById('users_url').value = data.users_url || '';
                    document.getElementById('logs_url').value = data.logs_url || '';
                }
            }catch(e){
                console.warn('Failed to load saved URLs', e);
            }
        }

        // Save current inputs to server
        async function saveUrls(){
            const users_url = document.getElementById('users_url').value.trim();
            const logs_url = document.getElementById('logs_url').value.trim();
            const payload = { users_url, logs_url };
            try{
                const res = await fetch('/urls', {
                    method: 'POST',
                    headers: { 'Content-Type': 'application/json' },
                    body: JSON.stringify(payload)
                });
                const data = await res.json();
                document.getElementById('result').textContent = data.message || JSON.stringify(data);
            }catch(err){
                document.getElementById('result').textContent = 'Save error: ' + err.toString();
            }
        }

        // Start check — do not send URLs; server will read saved URLs
        async function startCheck(){
            document.getElementById('result').textContent = 'Running...';
            try{
                const res = await fetch('/start');
                const data = await res.json();
                document.getElementById('result').textContent = JSON.stringify(data, null, 2);
            }catch(err){
                document.getElementById('result').textContent = 'Error: ' + err.toString();
            }
        }

        document.getElementById('saveBtn').addEventListener('click', saveUrls);
        document.getElementById('startBtn').addEventListener('click', startCheck);
        // Load saved on open
        loadSaved();
    </script>
</body>
</html>
"#;
