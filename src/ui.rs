pub fn render_index(today: &str) -> String {
    INDEX_HTML.replace("{{TODAY}}", today)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Weight Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef4fb;
      --bg-2: #cfe0f5;
      --ink: #24303c;
      --accent: #4a90e2;
      --accent-2: #2f4858;
      --good: #2d7a4b;
      --bad: #c63b2b;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e3edf9 60%, #f2f7fc 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(920px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-wrap: wrap;
      align-items: baseline;
      justify-content: space-between;
      gap: 6px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #5a6b7c;
      font-size: 1rem;
    }

    .entry-form {
      display: flex;
      flex-wrap: wrap;
      align-items: end;
      gap: 14px;
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
    }

    .field {
      display: grid;
      gap: 6px;
    }

    .field label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #7b8794;
    }

    input[type="date"],
    input[type="number"] {
      border: 1px solid rgba(47, 72, 88, 0.2);
      border-radius: 12px;
      padding: 10px 12px;
      font-size: 1rem;
      font-family: inherit;
      color: var(--ink);
      background: white;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(170px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 8px;
    }

    .stat span {
      display: block;
    }

    .stat .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #7b8794;
    }

    .stat .value {
      font-size: 1.6rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .stat .value.down {
      color: var(--good);
    }

    .stat .value.up {
      color: var(--bad);
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 20px;
      font-size: 1rem;
      font-weight: 600;
      font-family: inherit;
      cursor: pointer;
      transition: transform 150ms ease, box-shadow 150ms ease;
      display: inline-flex;
      align-items: center;
      justify-content: center;
      gap: 10px;
    }

    button:active {
      transform: scale(0.98);
    }

    .btn-save {
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(74, 144, 226, 0.3);
    }

    .btn-quiet {
      background: rgba(47, 72, 88, 0.08);
      color: var(--accent-2);
      padding: 12px 16px;
    }

    .goal-card {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 12px;
    }

    .goal-row {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
    }

    .goal-controls {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      gap: 10px;
    }

    .goal-track {
      width: 100%;
      height: 14px;
      border-radius: 999px;
      background: rgba(47, 72, 88, 0.1);
      overflow: hidden;
    }

    .goal-fill {
      height: 100%;
      width: 0%;
      border-radius: 999px;
      background: linear-gradient(90deg, var(--accent), #7fb4ed);
      transition: width 400ms ease;
    }

    .goal-caption {
      font-size: 0.95rem;
      color: #5a6b7c;
    }

    .chart-area {
      display: grid;
      gap: 16px;
    }

    .chart-header {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 16px;
    }

    .chart-header h2 {
      margin: 0;
      font-size: 1.4rem;
    }

    .tabs {
      display: flex;
      flex-wrap: wrap;
      gap: 6px;
      padding: 6px;
      background: rgba(47, 72, 88, 0.08);
      border-radius: 999px;
    }

    .tab {
      background: transparent;
      border: none;
      border-radius: 999px;
      padding: 8px 14px;
      font-size: 0.9rem;
      font-weight: 600;
      color: #66707a;
      box-shadow: none;
    }

    .tab.active {
      background: white;
      color: var(--accent-2);
      box-shadow: 0 8px 16px rgba(47, 72, 88, 0.12);
    }

    .chart-card {
      background: white;
      border-radius: 20px;
      padding: 16px;
      border: 1px solid rgba(47, 72, 88, 0.08);
    }

    #chart {
      width: 100%;
      height: 280px;
      display: block;
    }

    #chart text {
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
    }

    .chart-line {
      fill: none;
      stroke: var(--accent);
      stroke-width: 3;
    }

    .chart-point {
      fill: white;
      stroke: var(--accent);
      stroke-width: 2;
    }

    .chart-grid {
      stroke: rgba(47, 72, 88, 0.12);
    }

    .chart-goal {
      stroke: var(--good);
      stroke-width: 2;
      stroke-dasharray: 6 6;
    }

    .chart-label {
      fill: #7a8490;
      font-size: 11px;
    }

    .entries-card {
      background: white;
      border-radius: 20px;
      padding: 16px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 12px;
    }

    .entries-head {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
    }

    .entries-head h2 {
      margin: 0;
      font-size: 1.2rem;
    }

    .export-link {
      font-weight: 600;
      color: var(--accent);
      text-decoration: none;
    }

    table {
      width: 100%;
      border-collapse: collapse;
      font-size: 0.95rem;
    }

    th, td {
      text-align: left;
      padding: 10px 8px;
      border-bottom: 1px solid rgba(47, 72, 88, 0.08);
    }

    th {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #7b8794;
    }

    .row-actions button {
      padding: 6px 12px;
      font-size: 0.85rem;
    }

    .empty-note {
      color: #7b8794;
      text-align: center;
      padding: 12px 0;
    }

    .status {
      font-size: 0.95rem;
      color: #66707a;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: var(--bad);
    }

    .status[data-type="ok"] {
      color: var(--good);
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
      .entry-form button {
        width: 100%;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Weight Tracker</h1>
      <p class="subtitle">One entry per day. The chart and stats follow along.</p>
    </header>

    <form class="entry-form" id="entry-form">
      <div class="field">
        <label for="date">Date</label>
        <input type="date" id="date" value="{{TODAY}}" required />
      </div>
      <div class="field">
        <label for="weight">Weight (kg)</label>
        <input type="number" id="weight" step="0.1" min="0.1" placeholder="72.5" required />
      </div>
      <button class="btn-save" id="save-btn" type="submit">Save entry</button>
      <button class="btn-quiet" id="cancel-edit" type="button" hidden>Cancel edit</button>
    </form>

    <section class="panel">
      <div class="stat">
        <span class="label">Current weight</span>
        <span id="current-weight" class="value">--</span>
      </div>
      <div class="stat">
        <span class="label">7-day change</span>
        <span id="change-week" class="value">--</span>
      </div>
      <div class="stat">
        <span class="label">30-day change</span>
        <span id="change-month" class="value">--</span>
      </div>
      <div class="stat">
        <span class="label">Streak</span>
        <span id="streak" class="value">0 days</span>
      </div>
    </section>

    <section class="goal-card">
      <div class="goal-row">
        <h2 style="margin: 0; font-size: 1.2rem;">Goal</h2>
        <div class="goal-controls">
          <input type="number" id="goal-input" step="0.1" min="0.1" placeholder="70.0" />
          <button class="btn-save" id="goal-set" type="button">Set goal</button>
          <button class="btn-quiet" id="goal-clear" type="button">Clear</button>
        </div>
      </div>
      <div class="goal-track"><div class="goal-fill" id="goal-fill"></div></div>
      <div class="goal-caption" id="goal-caption">No goal set.</div>
    </section>

    <section class="chart-area">
      <div class="chart-header">
        <h2>Progress</h2>
        <div class="tabs" role="tablist">
          <button class="tab" type="button" data-range="week" role="tab">Week</button>
          <button class="tab" type="button" data-range="month" role="tab">Month</button>
          <button class="tab" type="button" data-range="3months" role="tab">3 Months</button>
          <button class="tab" type="button" data-range="year" role="tab">Year</button>
          <button class="tab active" type="button" data-range="all" role="tab">All</button>
        </div>
      </div>
      <div class="chart-card">
        <svg id="chart" viewBox="0 0 640 280" aria-label="Weight chart" role="img"></svg>
      </div>
    </section>

    <section class="entries-card">
      <div class="entries-head">
        <h2>Entries</h2>
        <a class="export-link" href="/api/export" download>Export CSV</a>
      </div>
      <table>
        <thead>
          <tr><th>Date</th><th>Weight (kg)</th><th></th></tr>
        </thead>
        <tbody id="entries-body"></tbody>
      </table>
      <div class="empty-note" id="empty-note" hidden>No entries yet. Add your first weight above.</div>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const dateInput = document.getElementById('date');
    const weightInput = document.getElementById('weight');
    const entryForm = document.getElementById('entry-form');
    const saveBtn = document.getElementById('save-btn');
    const cancelEditBtn = document.getElementById('cancel-edit');
    const currentWeightEl = document.getElementById('current-weight');
    const changeWeekEl = document.getElementById('change-week');
    const changeMonthEl = document.getElementById('change-month');
    const streakEl = document.getElementById('streak');
    const goalInput = document.getElementById('goal-input');
    const goalFillEl = document.getElementById('goal-fill');
    const goalCaptionEl = document.getElementById('goal-caption');
    const chartEl = document.getElementById('chart');
    const entriesBody = document.getElementById('entries-body');
    const emptyNote = document.getElementById('empty-note');
    const statusEl = document.getElementById('status');
    const tabs = Array.from(document.querySelectorAll('.tab'));

    let activeRange = 'all';
    let knownEntries = [];
    let goalTarget = null;
    let editingDate = null;

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const flashStatus = (message, type) => {
      setStatus(message, type);
      setTimeout(() => setStatus('', ''), 1500);
    };

    const formatKg = (value) => `${value.toFixed(1)} kg`;

    const formatChange = (value, el) => {
      if (typeof value !== 'number') {
        el.textContent = '--';
        el.classList.remove('up', 'down');
        return;
      }
      const sign = value > 0 ? '+' : '';
      el.textContent = `${sign}${value.toFixed(1)} kg`;
      el.classList.toggle('up', value > 0);
      el.classList.toggle('down', value < 0);
    };

    const renderSummary = (summary) => {
      currentWeightEl.textContent = summary.current ? formatKg(summary.current.weight) : '--';
      formatChange(summary.change_week, changeWeekEl);
      formatChange(summary.change_month, changeMonthEl);
      streakEl.textContent = `${summary.streak_days} ${summary.streak_days === 1 ? 'day' : 'days'}`;

      goalTarget = summary.goal.target;
      if (goalTarget === null || goalTarget === undefined) {
        goalFillEl.style.width = '0%';
        goalCaptionEl.textContent = 'No goal set.';
        goalInput.value = '';
        return;
      }
      goalInput.value = goalTarget;
      const percent = typeof summary.goal.percent === 'number' ? summary.goal.percent : 0;
      goalFillEl.style.width = `${percent}%`;
      goalCaptionEl.textContent = `${percent.toFixed(0)}% of the way to ${formatKg(goalTarget)}`;
    };

    const renderChart = (points) => {
      if (!points.length) {
        chartEl.innerHTML = '<text class="chart-label" x="50%" y="50%" text-anchor="middle">No data in this range</text>';
        return;
      }

      const width = 640;
      const height = 280;
      const paddingX = 48;
      const paddingY = 34;
      const top = 24;

      const values = points.map((point) => point.weight);
      let min = Math.min(...values);
      let max = Math.max(...values);
      if (goalTarget !== null && goalTarget !== undefined) {
        min = Math.min(min, goalTarget);
        max = Math.max(max, goalTarget);
      }
      if (min === max) {
        min -= 1;
        max += 1;
      }
      const pad = (max - min) * 0.08;
      min -= pad;
      max += pad;

      const range = max - min;
      const xStep = points.length > 1 ? (width - paddingX * 2) / (points.length - 1) : 0;
      const scaleY = (height - top - paddingY) / range;
      const x = (index) => points.length > 1 ? paddingX + index * xStep : width / 2;
      const y = (value) => height - paddingY - (value - min) * scaleY;

      const path = points
        .map((point, index) => `${index === 0 ? 'M' : 'L'} ${x(index).toFixed(2)} ${y(point.weight).toFixed(2)}`)
        .join(' ');

      const ticks = 4;
      let grid = '';
      for (let i = 0; i <= ticks; i += 1) {
        const value = min + (range * i) / ticks;
        const yPos = y(value);
        grid += `<line class="chart-grid" x1="${paddingX}" y1="${yPos}" x2="${width - paddingX}" y2="${yPos}" />`;
        grid += `<text class="chart-label" x="${paddingX - 10}" y="${yPos + 4}" text-anchor="end">${value.toFixed(1)}</text>`;
      }

      const labelEvery = Math.max(1, Math.ceil(points.length / 9));
      const xLabels = points
        .map((point, index) => {
          if (index % labelEvery !== 0) {
            return '';
          }
          return `<text class="chart-label" x="${x(index)}" y="${height - paddingY + 18}" text-anchor="middle">${point.date.slice(5)}</text>`;
        })
        .join('');

      const circles = points
        .map((point, index) => `<circle class="chart-point" cx="${x(index)}" cy="${y(point.weight)}" r="4" />`)
        .join('');

      let goalLine = '';
      if (goalTarget !== null && goalTarget !== undefined) {
        const yGoal = y(goalTarget);
        goalLine = `<line class="chart-goal" x1="${paddingX}" y1="${yGoal}" x2="${width - paddingX}" y2="${yGoal}" />`;
        goalLine += `<text class="chart-label" x="${width - paddingX}" y="${yGoal - 6}" text-anchor="end">goal ${goalTarget.toFixed(1)}</text>`;
      }

      chartEl.setAttribute('viewBox', `0 0 ${width} ${height}`);
      chartEl.innerHTML = `
        ${grid}
        ${goalLine}
        <path class="chart-line" d="${path}" />
        ${circles}
        ${xLabels}
      `;
    };

    const renderTable = () => {
      entriesBody.innerHTML = '';
      emptyNote.hidden = knownEntries.length > 0;
      for (const entry of [...knownEntries].reverse()) {
        const row = document.createElement('tr');

        const dateCell = document.createElement('td');
        dateCell.textContent = entry.date;
        const weightCell = document.createElement('td');
        weightCell.textContent = entry.weight.toFixed(1);

        const actionCell = document.createElement('td');
        actionCell.className = 'row-actions';
        const editBtn = document.createElement('button');
        editBtn.className = 'btn-quiet';
        editBtn.type = 'button';
        editBtn.textContent = 'Edit';
        editBtn.addEventListener('click', () => startEdit(entry));
        const deleteBtn = document.createElement('button');
        deleteBtn.className = 'btn-quiet';
        deleteBtn.type = 'button';
        deleteBtn.textContent = 'Delete';
        deleteBtn.addEventListener('click', () => deleteEntry(entry.date));
        actionCell.append(editBtn, deleteBtn);

        row.append(dateCell, weightCell, actionCell);
        entriesBody.appendChild(row);
      }
    };

    const startEdit = (entry) => {
      editingDate = entry.date;
      dateInput.value = entry.date;
      weightInput.value = entry.weight;
      saveBtn.textContent = 'Update entry';
      cancelEditBtn.hidden = false;
      weightInput.focus();
    };

    const stopEdit = () => {
      editingDate = null;
      saveBtn.textContent = 'Save entry';
      cancelEditBtn.hidden = true;
      weightInput.value = '';
    };

    const request = async (url, options) => {
      const res = await fetch(url, options);
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      return res.json();
    };

    const postJson = (url, body) => request(url, {
      method: 'POST',
      headers: { 'content-type': 'application/json' },
      body: JSON.stringify(body)
    });

    const loadSummary = async () => {
      renderSummary(await request('/api/summary'));
    };

    const loadChart = async () => {
      const data = await request(`/api/entries?range=${activeRange}`);
      renderChart(data.points);
    };

    const loadTable = async () => {
      const data = await request('/api/entries?range=all');
      knownEntries = data.points;
      renderTable();
    };

    const refresh = async () => {
      await loadTable();
      await Promise.all([loadSummary(), loadChart()]);
    };

    const saveEntry = async () => {
      const date = dateInput.value;
      const weight = parseFloat(weightInput.value);
      if (!date || Number.isNaN(weight)) {
        setStatus('Enter a valid date and weight.', 'error');
        return;
      }

      if (editingDate !== null) {
        await postJson('/api/entries/edit', { original_date: editingDate, date, weight });
        stopEdit();
        flashStatus('Entry updated', 'ok');
        return;
      }

      const existing = knownEntries.find((entry) => entry.date === date);
      if (existing && !window.confirm(`Replace the ${existing.weight.toFixed(1)} kg entry for ${date}?`)) {
        return;
      }
      const saved = await postJson('/api/entries', { date, weight });
      weightInput.value = '';
      flashStatus(saved.replaced ? 'Entry replaced' : 'Entry saved', 'ok');
    };

    const deleteEntry = async (date) => {
      if (!window.confirm(`Delete the entry for ${date}?`)) {
        return;
      }
      await postJson('/api/entries/delete', { date });
      if (editingDate === date) {
        stopEdit();
      }
      flashStatus('Entry deleted', 'ok');
      refresh().catch((err) => setStatus(err.message, 'error'));
    };

    const setGoal = async (target) => {
      await postJson('/api/goal', { target });
      flashStatus(target === null ? 'Goal cleared' : 'Goal set', 'ok');
      refresh().catch((err) => setStatus(err.message, 'error'));
    };

    const setActiveRange = (range) => {
      activeRange = range;
      tabs.forEach((button) => {
        button.classList.toggle('active', button.dataset.range === range);
      });
      loadChart().catch((err) => setStatus(err.message, 'error'));
    };

    tabs.forEach((button) => {
      button.addEventListener('click', () => setActiveRange(button.dataset.range));
    });

    entryForm.addEventListener('submit', (event) => {
      event.preventDefault();
      saveEntry()
        .then(() => refresh())
        .catch((err) => setStatus(err.message, 'error'));
    });

    cancelEditBtn.addEventListener('click', () => stopEdit());

    document.getElementById('goal-set').addEventListener('click', () => {
      const target = parseFloat(goalInput.value);
      if (Number.isNaN(target)) {
        setStatus('Enter a goal weight first.', 'error');
        return;
      }
      setGoal(target).catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('goal-clear').addEventListener('click', () => {
      setGoal(null).catch((err) => setStatus(err.message, 'error'));
    });

    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
