mod report_worker_test;
